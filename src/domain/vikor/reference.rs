//! Reference Extractor - Fuzzy ideal and anti-ideal per criterion.

use serde::{Deserialize, Serialize};

use super::FuzzyMatrix;
use crate::domain::foundation::{CriterionDirection, TriangularFuzzyNumber};

/// Best (ideal) and worst (anti-ideal) attainable value per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    pub ideal: Vec<TriangularFuzzyNumber>,
    pub anti_ideal: Vec<TriangularFuzzyNumber>,
}

/// Extracts the direction-aware references from an aggregated matrix.
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    /// Computes ideal and anti-ideal for each criterion in `directions`.
    ///
    /// # Algorithm
    /// - Benefit: ideal = componentwise max, anti-ideal = componentwise min
    /// - Cost: ideal = componentwise min, anti-ideal = componentwise max
    ///
    /// # Edge Cases
    /// - No alternatives: Both references are the zero fuzzy number
    /// - Row shorter than the criteria count: Missing cell reads as zero
    pub fn extract(matrix: &FuzzyMatrix, directions: &[CriterionDirection]) -> ReferencePoints {
        let (ideal, anti_ideal) = directions
            .iter()
            .enumerate()
            .map(|(j, direction)| {
                let (highest, lowest) = Self::column_bounds(matrix, j);
                match direction {
                    CriterionDirection::Benefit => (highest, lowest),
                    CriterionDirection::Cost => (lowest, highest),
                }
            })
            .unzip();

        ReferencePoints { ideal, anti_ideal }
    }

    /// Componentwise (max, min) of column `j`.
    fn column_bounds(
        matrix: &FuzzyMatrix,
        criterion: usize,
    ) -> (TriangularFuzzyNumber, TriangularFuzzyNumber) {
        let mut column = matrix
            .iter()
            .map(|row| row.get(criterion).copied().unwrap_or_default());

        let Some(first) = column.next() else {
            return (TriangularFuzzyNumber::ZERO, TriangularFuzzyNumber::ZERO);
        };

        column.fold((first, first), |(highest, lowest), value| {
            (highest.max(&value), lowest.min(&value))
        })
    }
}
