//! VikorEngine - The full fuzzy VIKOR pipeline as one pure computation.
//!
//! Stages run in a fixed order:
//! aggregate → references → normalize → weight → S/R → Q → rank → accept.
//!
//! The engine holds no state besides its settings. Every call recomputes from
//! the inputs, so repeated calls with the same inputs give identical outputs.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    Aggregator, CompromiseIndex, CompromiseRanker, CompromiseResult, FuzzyMatrix, Normalizer,
    RankingEntry, ReferenceExtractor, ReferencePoints, UtilityAggregator, UtilityExtrema,
    UtilityMeasures, Weighter,
};
use crate::domain::assessment::Assessment;
use crate::domain::foundation::{
    CriterionDirection, Defuzzification, StrategyWeight, TriangularFuzzyNumber,
};

/// Fixed parameters of one computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub strategy_weight: StrategyWeight,
    pub defuzzification: Defuzzification,
}

impl EngineSettings {
    pub fn new(strategy_weight: StrategyWeight, defuzzification: Defuzzification) -> Self {
        Self {
            strategy_weight,
            defuzzification,
        }
    }

    pub fn with_strategy_weight(self, strategy_weight: StrategyWeight) -> Self {
        Self {
            strategy_weight,
            ..self
        }
    }
}

/// Every intermediate and final result of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VikorOutcome {
    pub settings: EngineSettings,
    /// Per criterion.
    pub directions: Vec<CriterionDirection>,
    /// Per criterion.
    pub aggregated_weights: Vec<TriangularFuzzyNumber>,
    /// `[alternative][criterion]`.
    pub aggregated_performance: FuzzyMatrix,
    pub references: ReferencePoints,
    pub normalized: FuzzyMatrix,
    pub weighted: FuzzyMatrix,
    /// S and R per alternative.
    pub utilities: Vec<UtilityMeasures>,
    pub extrema: UtilityExtrema,
    /// Q per alternative.
    pub compromise_indices: Vec<CompromiseIndex>,
    /// Sorted by ascending Q.
    pub ranking: Vec<RankingEntry>,
    pub compromise: CompromiseResult,
}

impl VikorOutcome {
    pub fn alternative_count(&self) -> usize {
        self.utilities.len()
    }

    pub fn s_values(&self) -> Vec<f64> {
        self.utilities.iter().map(|u| u.s).collect()
    }

    pub fn r_values(&self) -> Vec<f64> {
        self.utilities.iter().map(|u| u.r).collect()
    }

    pub fn q_values(&self) -> Vec<f64> {
        self.compromise_indices.iter().map(|q| q.value).collect()
    }

    /// Alternative ranked first by Q, if any.
    pub fn best_alternative(&self) -> Option<usize> {
        self.ranking.first().map(|entry| entry.alternative)
    }

    /// Alternatives in ascending Q order.
    pub fn q_order(&self) -> Vec<usize> {
        self.ranking.iter().map(|entry| entry.alternative).collect()
    }
}

/// Runs the pipeline with fixed settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct VikorEngine {
    settings: EngineSettings,
}

impl VikorEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Aggregates the expert judgments of `assessment` and runs the pipeline.
    pub fn compute(&self, assessment: &Assessment) -> VikorOutcome {
        let weights = Aggregator::aggregate_weights(assessment);
        let matrix = Aggregator::aggregate_performance(assessment);
        self.compute_aggregated(weights, matrix, assessment.directions())
    }

    /// Runs the pipeline from already aggregated weights and performance.
    ///
    /// # Edge Cases
    /// - No alternatives: empty S/R/Q and ranking, `NoAlternatives`
    /// - One alternative: `NotApplicable`
    /// - S range of zero: every Q is 0
    pub fn compute_aggregated(
        &self,
        aggregated_weights: Vec<TriangularFuzzyNumber>,
        aggregated_performance: FuzzyMatrix,
        directions: &[CriterionDirection],
    ) -> VikorOutcome {
        let method = self.settings.defuzzification;

        let references = ReferenceExtractor::extract(&aggregated_performance, directions);
        let normalized = Normalizer::normalize(&aggregated_performance, &references, directions);
        let weighted = Weighter::apply(&normalized, &aggregated_weights);
        let utilities = UtilityAggregator::aggregate(&weighted, method);

        let extrema = UtilityExtrema::from_measures(&utilities);
        if utilities.is_empty() {
            warn!("no alternatives to rank");
        } else if extrema.is_degenerate() {
            debug!(
                s_star = extrema.s_star,
                s_minus = extrema.s_minus,
                s_range = extrema.s_range,
                "group utility does not discriminate, compromise index is zero"
            );
        }

        let compromise_indices = CompromiseRanker::compromise_indices(
            &utilities,
            &extrema,
            self.settings.strategy_weight,
            method,
        );
        let ranking = CompromiseRanker::rank(&utilities, &compromise_indices);
        let compromise = CompromiseResult::evaluate(&ranking);

        if let CompromiseResult::NotApplicable { alternative } = compromise {
            debug!(alternative, "single alternative, acceptance check not applicable");
        }

        VikorOutcome {
            settings: self.settings,
            directions: directions.to_vec(),
            aggregated_weights,
            aggregated_performance,
            references,
            normalized,
            weighted,
            utilities,
            extrema,
            compromise_indices,
            ranking,
            compromise,
        }
    }
}
