//! Compromise Ranker - Compromise index Q and the S/R/Q rankings.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::UtilityMeasures;
use crate::domain::foundation::{
    sanitize, Defuzzification, StrategyWeight, TriangularFuzzyNumber,
};

/// Extreme values of S and R across all alternatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UtilityExtrema {
    /// S* = min defuzzified S.
    pub s_star: f64,
    /// S⁻ = max defuzzified S.
    pub s_minus: f64,
    /// R* = min defuzzified R.
    pub r_star: f64,
    /// R⁻ = max defuzzified R.
    pub r_minus: f64,
    /// Componentwise min over all fuzzy S.
    pub s_star_fuzzy: TriangularFuzzyNumber,
    /// Componentwise min over all fuzzy R.
    pub r_star_fuzzy: TriangularFuzzyNumber,
    /// max(S.upper) - min(S.lower).
    pub s_range: f64,
    /// max(R.upper) - min(R.lower).
    pub r_range: f64,
}

impl UtilityExtrema {
    /// Collects the extrema. Every field is 0 when there are no alternatives.
    pub fn from_measures(measures: &[UtilityMeasures]) -> Self {
        let Some(first) = measures.first() else {
            return Self::default();
        };

        let seed = Self {
            s_star: first.s,
            s_minus: first.s,
            r_star: first.r,
            r_minus: first.r,
            s_star_fuzzy: first.group_utility,
            r_star_fuzzy: first.individual_regret,
            s_range: 0.0,
            r_range: 0.0,
        };
        let mut s_bounds = (first.group_utility.lower, first.group_utility.upper);
        let mut r_bounds = (first.individual_regret.lower, first.individual_regret.upper);

        let mut extrema = measures.iter().skip(1).fold(seed, |acc, m| {
            s_bounds = (
                s_bounds.0.min(m.group_utility.lower),
                s_bounds.1.max(m.group_utility.upper),
            );
            r_bounds = (
                r_bounds.0.min(m.individual_regret.lower),
                r_bounds.1.max(m.individual_regret.upper),
            );
            Self {
                s_star: acc.s_star.min(m.s),
                s_minus: acc.s_minus.max(m.s),
                r_star: acc.r_star.min(m.r),
                r_minus: acc.r_minus.max(m.r),
                s_star_fuzzy: acc.s_star_fuzzy.min(&m.group_utility),
                r_star_fuzzy: acc.r_star_fuzzy.min(&m.individual_regret),
                ..acc
            }
        });

        extrema.s_range = sanitize(s_bounds.1 - s_bounds.0);
        extrema.r_range = sanitize(r_bounds.1 - r_bounds.0);
        extrema
    }

    /// True when S cannot discriminate between alternatives.
    pub fn is_degenerate(&self) -> bool {
        self.s_minus == self.s_star || self.s_range == 0.0
    }
}

/// Fuzzy and defuzzified compromise index of one alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompromiseIndex {
    pub fuzzy: TriangularFuzzyNumber,
    pub value: f64,
}

/// One row of the ranking table.
///
/// Ranks start at 1 (best, lowest value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub alternative: usize,
    pub s: f64,
    pub r: f64,
    pub q: f64,
    pub q_rank: usize,
    pub s_rank: usize,
    pub r_rank: usize,
}

/// Compromise index computation and ranking.
pub struct CompromiseRanker;

impl CompromiseRanker {
    /// Computes Q for every alternative.
    ///
    /// # Algorithm
    /// Q = v * (S ⊖ S*) / S_range + (1 - v) * (R ⊖ R*) / R_range
    ///
    /// # Edge Cases
    /// - R_range = 0: the regret term is 0
    /// - S⁻ = S* or S_range = 0: every Q is 0, no discrimination possible
    pub fn compromise_indices(
        measures: &[UtilityMeasures],
        extrema: &UtilityExtrema,
        strategy: StrategyWeight,
        method: Defuzzification,
    ) -> Vec<CompromiseIndex> {
        if extrema.is_degenerate() {
            return vec![CompromiseIndex::default(); measures.len()];
        }

        measures
            .iter()
            .map(|m| {
                let utility_term = m
                    .group_utility
                    .subtract(&extrema.s_star_fuzzy)
                    .scalar_div(extrema.s_range);
                let regret_term = m
                    .individual_regret
                    .subtract(&extrema.r_star_fuzzy)
                    .scalar_div(extrema.r_range);

                let fuzzy = utility_term
                    .scale(strategy.value())
                    .add(&regret_term.scale(strategy.complement()));

                CompromiseIndex {
                    fuzzy,
                    value: fuzzy.defuzzify(method),
                }
            })
            .collect()
    }

    /// Builds the ranking table, ordered by ascending Q.
    ///
    /// Ties keep the original alternative order.
    pub fn rank(measures: &[UtilityMeasures], indices: &[CompromiseIndex]) -> Vec<RankingEntry> {
        let s: Vec<f64> = measures.iter().map(|m| m.s).collect();
        let r: Vec<f64> = measures.iter().map(|m| m.r).collect();
        let q: Vec<f64> = (0..measures.len())
            .map(|a| indices.get(a).map(|i| i.value).unwrap_or_default())
            .collect();

        let s_ranks = rank_positions(&s);
        let r_ranks = rank_positions(&r);
        let q_ranks = rank_positions(&q);

        let mut table: Vec<RankingEntry> = (0..measures.len())
            .map(|a| RankingEntry {
                alternative: a,
                s: s[a],
                r: r[a],
                q: q[a],
                q_rank: q_ranks[a],
                s_rank: s_ranks[a],
                r_rank: r_ranks[a],
            })
            .collect();

        table.sort_by_key(|entry| entry.q_rank);
        table
    }
}

/// 1-based ascending rank of each value, indexed like `values`.
///
/// Equal values are ranked by their position.
pub fn rank_positions(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0; values.len()];
    for (position, alternative) in order.into_iter().enumerate() {
        ranks[alternative] = position + 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measures(values: &[(f64, f64)]) -> Vec<UtilityMeasures> {
        values
            .iter()
            .map(|&(s, r)| UtilityMeasures {
                group_utility: TriangularFuzzyNumber::crisp(s),
                individual_regret: TriangularFuzzyNumber::crisp(r),
                s,
                r,
            })
            .collect()
    }

    #[test]
    fn rank_positions_are_one_based_and_stable() {
        assert_eq!(rank_positions(&[0.3, 0.1, 0.2]), vec![3, 1, 2]);
        assert_eq!(rank_positions(&[0.5, 0.5, 0.1]), vec![2, 3, 1]);
        assert!(rank_positions(&[]).is_empty());
    }

    #[test]
    fn extrema_of_empty_set_are_zero() {
        assert_eq!(UtilityExtrema::from_measures(&[]), UtilityExtrema::default());
        assert!(UtilityExtrema::default().is_degenerate());
    }

    #[test]
    fn extrema_collect_min_max_and_ranges() {
        let ms = vec![
            UtilityMeasures {
                group_utility: TriangularFuzzyNumber::new(0.1, 0.5, 0.9),
                individual_regret: TriangularFuzzyNumber::new(0.0, 0.2, 0.4),
                s: 0.5,
                r: 0.2,
            },
            UtilityMeasures {
                group_utility: TriangularFuzzyNumber::new(0.0, 0.7, 1.1),
                individual_regret: TriangularFuzzyNumber::new(0.1, 0.3, 0.3),
                s: 0.6,
                r: 0.7 / 3.0,
            },
        ];
        let e = UtilityExtrema::from_measures(&ms);
        assert_eq!(e.s_star, 0.5);
        assert_eq!(e.s_minus, 0.6);
        assert_eq!(e.r_star, 0.2);
        assert_eq!(e.s_star_fuzzy, TriangularFuzzyNumber::new(0.0, 0.5, 0.9));
        assert_eq!(e.r_star_fuzzy, TriangularFuzzyNumber::new(0.0, 0.2, 0.3));
        assert!((e.s_range - 1.1).abs() < 1e-12);
        assert!((e.r_range - 0.4).abs() < 1e-12);
        assert!(!e.is_degenerate());
    }

    #[test]
    fn crisp_q_matches_classic_formula() {
        let ms = measures(&[(0.2, 0.1), (0.6, 0.5), (0.4, 0.3)]);
        let e = UtilityExtrema::from_measures(&ms);
        let q = CompromiseRanker::compromise_indices(
            &ms,
            &e,
            StrategyWeight::CONSENSUS,
            Defuzzification::Centroid,
        );

        assert!(q[0].value.abs() < 1e-12);
        assert!((q[1].value - 1.0).abs() < 1e-12);
        assert!((q[2].value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_regret_range_drops_regret_term() {
        let ms = measures(&[(0.2, 0.3), (0.6, 0.3)]);
        let e = UtilityExtrema::from_measures(&ms);
        let q = CompromiseRanker::compromise_indices(
            &ms,
            &e,
            StrategyWeight::new(0.4),
            Defuzzification::Centroid,
        );
        assert!(q[0].value.abs() < 1e-12);
        assert!((q[1].value - 0.4).abs() < 1e-12);
    }

    #[test]
    fn degenerate_s_yields_all_zero_q() {
        let ms = measures(&[(0.4, 0.1), (0.4, 0.3)]);
        let e = UtilityExtrema::from_measures(&ms);
        assert!(e.is_degenerate());
        let q = CompromiseRanker::compromise_indices(
            &ms,
            &e,
            StrategyWeight::CONSENSUS,
            Defuzzification::Centroid,
        );
        assert!(q.iter().all(|i| i.value == 0.0 && i.fuzzy == TriangularFuzzyNumber::ZERO));
    }

    #[test]
    fn rank_orders_table_by_q_with_independent_s_and_r_ranks() {
        let ms = measures(&[(0.6, 0.1), (0.2, 0.5), (0.4, 0.3)]);
        let e = UtilityExtrema::from_measures(&ms);
        let q = CompromiseRanker::compromise_indices(
            &ms,
            &e,
            StrategyWeight::new(1.0),
            Defuzzification::Centroid,
        );
        let table = CompromiseRanker::rank(&ms, &q);

        let order: Vec<usize> = table.iter().map(|t| t.alternative).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(table[0].q_rank, 1);
        assert_eq!(table[0].s_rank, 1);
        assert_eq!(table[0].r_rank, 3);
        assert_eq!(table[2].r_rank, 1);
    }
}
