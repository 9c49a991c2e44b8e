//! Aggregator - Group consensus by arithmetic mean of expert judgments.

use super::FuzzyMatrix;
use crate::domain::assessment::Assessment;
use crate::domain::foundation::{LinguisticTerm, TriangularFuzzyNumber};

/// Averages expert judgments into one fuzzy number per cell.
pub struct Aggregator;

impl Aggregator {
    /// Arithmetic mean of the fuzzy numbers behind `terms`.
    ///
    /// Computed as a frequency-weighted sum over the scale, so a panel in
    /// full agreement reproduces the scale entry bit for bit.
    ///
    /// # Edge Cases
    /// - No terms: Returns the zero fuzzy number
    pub fn mean<T: LinguisticTerm>(terms: impl IntoIterator<Item = T>) -> TriangularFuzzyNumber {
        let terms: Vec<T> = terms.into_iter().collect();
        if terms.is_empty() {
            return TriangularFuzzyNumber::ZERO;
        }
        let total = terms.len() as f64;

        T::all()
            .iter()
            .filter_map(|candidate| {
                let count = terms.iter().filter(|t| *t == candidate).count();
                (count > 0).then(|| candidate.fuzzy_number().scale(count as f64 / total))
            })
            .sum()
    }

    /// Aggregated importance weight per criterion.
    ///
    /// # Algorithm
    /// For each criterion j: w_j = (1/E) * Σ_e importance[e][j]
    pub fn aggregate_weights(assessment: &Assessment) -> Vec<TriangularFuzzyNumber> {
        (0..assessment.criterion_count())
            .map(|j| {
                Self::mean((0..assessment.expert_count()).map(|e| assessment.weight_term(e, j)))
            })
            .collect()
    }

    /// Aggregated performance matrix, indexed `[alternative][criterion]`.
    ///
    /// # Algorithm
    /// For each cell (a, j): f_aj = (1/E) * Σ_e performance[e][a][j]
    pub fn aggregate_performance(assessment: &Assessment) -> FuzzyMatrix {
        (0..assessment.alternative_count())
            .map(|a| {
                (0..assessment.criterion_count())
                    .map(|j| {
                        Self::mean(
                            (0..assessment.expert_count())
                                .map(|e| assessment.performance_term(e, a, j)),
                        )
                    })
                    .collect()
            })
            .collect()
    }
}
