//! Utility Aggregator - Group utility (S) and individual regret (R).

use serde::{Deserialize, Serialize};

use super::FuzzyMatrix;
use crate::domain::foundation::{Defuzzification, TriangularFuzzyNumber};

/// S and R of one alternative, fuzzy and defuzzified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilityMeasures {
    /// Fuzzy S: sum of weighted normalized deviations.
    pub group_utility: TriangularFuzzyNumber,
    /// Fuzzy R: componentwise max of weighted normalized deviations.
    pub individual_regret: TriangularFuzzyNumber,
    /// Defuzzified S.
    pub s: f64,
    /// Defuzzified R.
    pub r: f64,
}

pub struct UtilityAggregator;

impl UtilityAggregator {
    /// Computes S and R for one row of weighted deviations.
    ///
    /// # Edge Cases
    /// - No criteria: S and R are zero
    pub fn measure(row: &[TriangularFuzzyNumber], method: Defuzzification) -> UtilityMeasures {
        let group_utility: TriangularFuzzyNumber = row.iter().copied().sum();
        let individual_regret = row
            .iter()
            .copied()
            .reduce(|highest, value| highest.max(&value))
            .unwrap_or_default();

        UtilityMeasures {
            group_utility,
            individual_regret,
            s: group_utility.defuzzify(method),
            r: individual_regret.defuzzify(method),
        }
    }

    /// Computes S and R for every alternative of `weighted`.
    pub fn aggregate(weighted: &FuzzyMatrix, method: Defuzzification) -> Vec<UtilityMeasures> {
        weighted.iter().map(|row| Self::measure(row, method)).collect()
    }
}
