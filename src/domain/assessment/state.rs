//! Assessment - the expert judgments the engine consumes.
//!
//! An `Assessment` owns the counts of alternatives, criteria and experts,
//! the direction of each criterion, every linguistic judgment, and the
//! optional strategy weight chosen with them. Everything the engine derives
//! is recomputed from this value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::AssessmentDocument;
use crate::domain::foundation::{
    CriterionDirection, ImportanceTerm, PerformanceTerm, StrategyWeight, ValidationError,
};

/// Expert judgments about criteria importance and alternative performance.
///
/// Grids are dense: a cell that was never set holds the default term of its
/// scale (`M` for importance, `F` for performance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AssessmentDocument", into = "AssessmentDocument")]
pub struct Assessment {
    alternatives: usize,
    criteria: usize,
    experts: usize,
    directions: Vec<CriterionDirection>,
    /// Indexed `[expert][criterion]`.
    weight_terms: Vec<Vec<ImportanceTerm>>,
    /// Indexed `[expert][alternative][criterion]`.
    performance_terms: Vec<Vec<Vec<PerformanceTerm>>>,
    strategy_weight: Option<StrategyWeight>,
}

impl Assessment {
    /// Creates an assessment where every cell holds its default term and
    /// every criterion is a benefit criterion.
    pub fn new(alternatives: usize, criteria: usize, experts: usize) -> Self {
        Self {
            alternatives,
            criteria,
            experts,
            directions: vec![CriterionDirection::default(); criteria],
            weight_terms: vec![vec![ImportanceTerm::default(); criteria]; experts],
            performance_terms: vec![
                vec![vec![PerformanceTerm::default(); criteria]; alternatives];
                experts
            ],
            strategy_weight: None,
        }
    }

    /// Creates a builder for constructing an assessment.
    pub fn builder() -> AssessmentBuilder {
        AssessmentBuilder::new()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// Returns the number of experts.
    pub fn expert_count(&self) -> usize {
        self.experts
    }

    pub fn directions(&self) -> &[CriterionDirection] {
        &self.directions
    }

    /// Direction of criterion `j`; benefit when `j` is out of range.
    pub fn direction(&self, criterion: usize) -> CriterionDirection {
        self.directions.get(criterion).copied().unwrap_or_default()
    }

    /// Importance judgment of `expert` for `criterion`, or the default term.
    pub fn weight_term(&self, expert: usize, criterion: usize) -> ImportanceTerm {
        self.weight_terms
            .get(expert)
            .and_then(|row| row.get(criterion))
            .copied()
            .unwrap_or_default()
    }

    /// Performance judgment of `expert` for (`alternative`, `criterion`), or the default term.
    pub fn performance_term(
        &self,
        expert: usize,
        alternative: usize,
        criterion: usize,
    ) -> PerformanceTerm {
        self.performance_terms
            .get(expert)
            .and_then(|block| block.get(alternative))
            .and_then(|row| row.get(criterion))
            .copied()
            .unwrap_or_default()
    }

    /// Strategy weight stored with the judgments, if any.
    pub fn strategy_weight(&self) -> Option<StrategyWeight> {
        self.strategy_weight
    }

    /// Replaces one importance judgment. Out-of-range indices leave the value unchanged.
    pub fn with_weight_term(mut self, expert: usize, criterion: usize, term: ImportanceTerm) -> Self {
        if let Some(cell) = self
            .weight_terms
            .get_mut(expert)
            .and_then(|row| row.get_mut(criterion))
        {
            *cell = term;
        }
        self
    }

    /// Replaces one performance judgment. Out-of-range indices leave the value unchanged.
    pub fn with_performance_term(
        mut self,
        expert: usize,
        alternative: usize,
        criterion: usize,
        term: PerformanceTerm,
    ) -> Self {
        if let Some(cell) = self
            .performance_terms
            .get_mut(expert)
            .and_then(|block| block.get_mut(alternative))
            .and_then(|row| row.get_mut(criterion))
        {
            *cell = term;
        }
        self
    }

    /// Sets the direction of one criterion. Out-of-range indices leave the value unchanged.
    pub fn with_direction(mut self, criterion: usize, direction: CriterionDirection) -> Self {
        if let Some(cell) = self.directions.get_mut(criterion) {
            *cell = direction;
        }
        self
    }

    /// Flips one criterion between benefit and cost.
    pub fn toggle_direction(self, criterion: usize) -> Self {
        let flipped = self.direction(criterion).toggled();
        self.with_direction(criterion, flipped)
    }

    pub fn with_strategy_weight(mut self, weight: StrategyWeight) -> Self {
        self.strategy_weight = Some(weight);
        self
    }

    /// Returns a copy with new counts.
    ///
    /// Cells whose (expert, alternative, criterion) indices remain valid keep
    /// their judgment; new cells take the default term and new criteria are
    /// benefit criteria.
    pub fn resized(&self, alternatives: usize, criteria: usize, experts: usize) -> Self {
        let directions = (0..criteria).map(|j| self.direction(j)).collect();

        let weight_terms = (0..experts)
            .map(|e| (0..criteria).map(|j| self.weight_term(e, j)).collect())
            .collect();

        let performance_terms = (0..experts)
            .map(|e| {
                (0..alternatives)
                    .map(|a| {
                        (0..criteria)
                            .map(|j| self.performance_term(e, a, j))
                            .collect()
                    })
                    .collect()
            })
            .collect();

        Self {
            alternatives,
            criteria,
            experts,
            directions,
            weight_terms,
            performance_terms,
            strategy_weight: self.strategy_weight,
        }
    }

    /// Checks that the assessment describes a decision the engine can rank.
    ///
    /// The engine tolerates zero counts; this check is for callers that want
    /// to reject such input at the boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.alternatives == 0 {
            return Err(ValidationError::empty_field("alternatives"));
        }
        if self.criteria == 0 {
            return Err(ValidationError::empty_field("criteria"));
        }
        if self.experts == 0 {
            return Err(ValidationError::empty_field("experts"));
        }
        Ok(())
    }
}

impl Default for Assessment {
    /// The starting state: 4 alternatives, 5 criteria, 4 experts, all defaults.
    fn default() -> Self {
        Self::new(4, 5, 4)
    }
}

/// Builder for constructing Assessment instances.
///
/// Cells addressed outside the declared counts are discarded by `build`.
#[derive(Debug, Default)]
pub struct AssessmentBuilder {
    alternatives: usize,
    criteria: usize,
    experts: usize,
    directions: HashMap<usize, CriterionDirection>,
    weights: HashMap<(usize, usize), ImportanceTerm>,
    performance: HashMap<(usize, usize, usize), PerformanceTerm>,
    strategy_weight: Option<StrategyWeight>,
}

impl AssessmentBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of alternatives.
    pub fn alternatives(mut self, count: usize) -> Self {
        self.alternatives = count;
        self
    }

    /// Sets the number of criteria.
    pub fn criteria(mut self, count: usize) -> Self {
        self.criteria = count;
        self
    }

    /// Sets the number of experts.
    pub fn experts(mut self, count: usize) -> Self {
        self.experts = count;
        self
    }

    /// Sets the direction of one criterion.
    pub fn direction(mut self, criterion: usize, direction: CriterionDirection) -> Self {
        self.directions.insert(criterion, direction);
        self
    }

    /// Sets the directions of all criteria from `is_benefit` flags.
    pub fn benefit_flags(mut self, flags: &[bool]) -> Self {
        for (j, flag) in flags.iter().enumerate() {
            self.directions
                .insert(j, CriterionDirection::from_is_benefit(*flag));
        }
        self
    }

    /// Adds one importance judgment.
    pub fn weight(mut self, expert: usize, criterion: usize, term: ImportanceTerm) -> Self {
        self.weights.insert((expert, criterion), term);
        self
    }

    /// Adds an expert's importance judgments for criteria 0..n.
    pub fn weight_row(mut self, expert: usize, terms: &[ImportanceTerm]) -> Self {
        for (j, term) in terms.iter().enumerate() {
            self.weights.insert((expert, j), *term);
        }
        self
    }

    /// Adds one performance judgment.
    pub fn performance(
        mut self,
        expert: usize,
        alternative: usize,
        criterion: usize,
        term: PerformanceTerm,
    ) -> Self {
        self.performance.insert((expert, alternative, criterion), term);
        self
    }

    /// Adds an expert's performance judgments of one alternative for criteria 0..n.
    pub fn performance_row(
        mut self,
        expert: usize,
        alternative: usize,
        terms: &[PerformanceTerm],
    ) -> Self {
        for (j, term) in terms.iter().enumerate() {
            self.performance.insert((expert, alternative, j), *term);
        }
        self
    }

    pub fn strategy_weight(mut self, weight: StrategyWeight) -> Self {
        self.strategy_weight = Some(weight);
        self
    }

    /// Builds the assessment, filling unset cells with default terms.
    pub fn build(self) -> Assessment {
        let mut assessment = Assessment::new(self.alternatives, self.criteria, self.experts);

        for (criterion, direction) in self.directions {
            assessment = assessment.with_direction(criterion, direction);
        }
        for ((expert, criterion), term) in self.weights {
            assessment = assessment.with_weight_term(expert, criterion, term);
        }
        for ((expert, alternative, criterion), term) in self.performance {
            assessment = assessment.with_performance_term(expert, alternative, criterion, term);
        }
        assessment.strategy_weight = self.strategy_weight;

        assessment
    }
}
