//! Weighter - Applies the aggregated criteria weights.

use super::FuzzyMatrix;
use crate::domain::foundation::TriangularFuzzyNumber;

pub struct Weighter;

impl Weighter {
    /// Elementwise product of each normalized cell with its criterion weight.
    ///
    /// A criterion without a weight contributes zero.
    pub fn apply(normalized: &FuzzyMatrix, weights: &[TriangularFuzzyNumber]) -> FuzzyMatrix {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, cell)| cell.mul(&weights.get(j).copied().unwrap_or_default()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_per_criterion() {
        let normalized = vec![vec![
            TriangularFuzzyNumber::new(0.0, 0.5, 1.5),
            TriangularFuzzyNumber::new(1.0, 1.0, 1.0),
        ]];
        let weights = vec![
            TriangularFuzzyNumber::new(0.3, 0.5, 0.7),
            TriangularFuzzyNumber::new(0.0, 0.1, 0.3),
        ];

        let weighted = Weighter::apply(&normalized, &weights);
        assert_eq!(weighted[0][0], TriangularFuzzyNumber::new(0.0, 0.25, 1.5 * 0.7));
        assert_eq!(weighted[0][1], weights[1]);
    }

    #[test]
    fn missing_weight_contributes_zero() {
        let normalized = vec![vec![TriangularFuzzyNumber::crisp(1.0); 2]];
        let weighted = Weighter::apply(&normalized, &[TriangularFuzzyNumber::crisp(0.5)]);
        assert_eq!(weighted[0][1], TriangularFuzzyNumber::ZERO);
    }
}
