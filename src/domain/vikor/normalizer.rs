//! Normalizer - Fuzzy normalized deviation from the ideal.

use super::{FuzzyMatrix, ReferencePoints};
use crate::domain::foundation::{CriterionDirection, TriangularFuzzyNumber};

/// Converts aggregated performance into distances from the ideal.
pub struct Normalizer;

impl Normalizer {
    /// Normalized deviation of one cell.
    ///
    /// # Algorithm
    /// - Benefit: (f* ⊖ f) ⊘ (f* ⊖ f⁻)
    /// - Cost: (f ⊖ f*) ⊘ (f⁻ ⊖ f*)
    ///
    /// where ⊖ is fuzzy subtraction and ⊘ approximate fuzzy division.
    /// Components are clamped to be non-negative; 0 means "at the ideal".
    pub fn normalize_cell(
        value: &TriangularFuzzyNumber,
        ideal: &TriangularFuzzyNumber,
        anti_ideal: &TriangularFuzzyNumber,
        direction: CriterionDirection,
    ) -> TriangularFuzzyNumber {
        let ratio = match direction {
            CriterionDirection::Benefit => {
                ideal.subtract(value).fuzzy_div(&ideal.subtract(anti_ideal))
            }
            CriterionDirection::Cost => {
                value.subtract(ideal).fuzzy_div(&anti_ideal.subtract(ideal))
            }
        };

        ratio.clamp_non_negative()
    }

    /// Normalizes every cell of `matrix`, indexed `[alternative][criterion]`.
    pub fn normalize(
        matrix: &FuzzyMatrix,
        references: &ReferencePoints,
        directions: &[CriterionDirection],
    ) -> FuzzyMatrix {
        matrix
            .iter()
            .map(|row| {
                directions
                    .iter()
                    .enumerate()
                    .map(|(j, direction)| {
                        let value = row.get(j).copied().unwrap_or_default();
                        let ideal = references.ideal.get(j).copied().unwrap_or_default();
                        let anti_ideal = references.anti_ideal.get(j).copied().unwrap_or_default();
                        Self::normalize_cell(&value, &ideal, &anti_ideal, *direction)
                    })
                    .collect()
            })
            .collect()
    }
}
