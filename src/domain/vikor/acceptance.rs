//! Acceptance - VIKOR acceptance conditions and the compromise set.
//!
//! The best alternative by Q is only accepted on its own when it leads the
//! runner-up by at least DQ = 1 / (m - 1) and is also best by S or by R.
//! Otherwise every alternative within DQ of the leader joins the set.

use serde::{Deserialize, Serialize};

use super::RankingEntry;

/// Outcome of both acceptance conditions for m >= 2 alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceCheck {
    /// DQ = 1 / (m - 1).
    pub threshold: f64,
    /// Q(a2) - Q(a1).
    pub advantage: f64,
    /// Best alternative by Q (a1).
    pub best: usize,
    /// Second best alternative by Q (a2).
    pub runner_up: usize,
    /// Condition 1: advantage >= DQ.
    pub acceptable_advantage: bool,
    /// Condition 2: a1 is also first by S or by R.
    pub acceptable_stability: bool,
    /// Compromise set, in Q order.
    pub accepted: Vec<usize>,
}

impl AcceptanceCheck {
    /// True when both conditions hold and a1 stands alone.
    pub fn is_unique(&self) -> bool {
        self.acceptable_advantage && self.acceptable_stability
    }
}

/// Result of the compromise check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompromiseResult {
    /// Nothing to rank.
    NoAlternatives,
    /// A single alternative; DQ is undefined and it is accepted trivially.
    NotApplicable { alternative: usize },
    /// Both conditions were evaluated.
    Evaluated(AcceptanceCheck),
}

impl CompromiseResult {
    /// Evaluates the acceptance conditions on a table sorted by ascending Q.
    ///
    /// # Algorithm
    /// 1. DQ = 1 / (m - 1)
    /// 2. C1: Q(a2) - Q(a1) >= DQ
    /// 3. C2: S-rank(a1) = 1 or R-rank(a1) = 1
    /// 4. Both hold: {a1}; else {a : Q(a) <= Q(a1) + DQ}
    ///
    /// # Edge Cases
    /// - Empty table: `NoAlternatives`
    /// - One entry: `NotApplicable` with that entry accepted
    pub fn evaluate(table: &[RankingEntry]) -> Self {
        let (best, runner_up) = match table {
            [] => return CompromiseResult::NoAlternatives,
            [only] => {
                return CompromiseResult::NotApplicable {
                    alternative: only.alternative,
                }
            }
            [best, runner_up, ..] => (best, runner_up),
        };

        let threshold = 1.0 / (table.len() - 1) as f64;
        let advantage = runner_up.q - best.q;
        let acceptable_advantage = advantage >= threshold;
        let acceptable_stability = best.s_rank == 1 || best.r_rank == 1;

        let accepted = if acceptable_advantage && acceptable_stability {
            vec![best.alternative]
        } else {
            let ceiling = best.q + threshold;
            table
                .iter()
                .filter(|entry| entry.q <= ceiling)
                .map(|entry| entry.alternative)
                .collect()
        };

        CompromiseResult::Evaluated(AcceptanceCheck {
            threshold,
            advantage,
            best: best.alternative,
            runner_up: runner_up.alternative,
            acceptable_advantage,
            acceptable_stability,
            accepted,
        })
    }

    /// The accepted alternatives, in Q order.
    pub fn accepted_set(&self) -> Vec<usize> {
        match self {
            CompromiseResult::NoAlternatives => Vec::new(),
            CompromiseResult::NotApplicable { alternative } => vec![*alternative],
            CompromiseResult::Evaluated(check) => check.accepted.clone(),
        }
    }

    /// True only when the conditions could be evaluated.
    pub fn is_ok(&self) -> bool {
        matches!(self, CompromiseResult::Evaluated(_))
    }

    /// DQ, when defined.
    pub fn threshold(&self) -> Option<f64> {
        match self {
            CompromiseResult::Evaluated(check) => Some(check.threshold),
            _ => None,
        }
    }

    pub fn check(&self) -> Option<&AcceptanceCheck> {
        match self {
            CompromiseResult::Evaluated(check) => Some(check),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(alternative: usize, q: f64, s_rank: usize, r_rank: usize, q_rank: usize) -> RankingEntry {
        RankingEntry {
            alternative,
            s: 0.0,
            r: 0.0,
            q,
            q_rank,
            s_rank,
            r_rank,
        }
    }

    #[test]
    fn empty_table_has_no_alternatives() {
        let result = CompromiseResult::evaluate(&[]);
        assert_eq!(result, CompromiseResult::NoAlternatives);
        assert!(!result.is_ok());
        assert!(result.accepted_set().is_empty());
        assert_eq!(result.threshold(), None);
    }

    #[test]
    fn single_alternative_is_not_applicable_but_accepted() {
        let result = CompromiseResult::evaluate(&[entry(0, 0.0, 1, 1, 1)]);
        assert_eq!(result, CompromiseResult::NotApplicable { alternative: 0 });
        assert_eq!(result.accepted_set(), vec![0]);
        assert!(!result.is_ok());
    }

    #[test]
    fn both_conditions_accept_leader_alone() {
        let table = [entry(2, 0.0, 1, 2, 1), entry(0, 0.6, 2, 1, 2), entry(1, 1.0, 3, 3, 3)];
        let result = CompromiseResult::evaluate(&table);
        let check = result.check().unwrap();

        assert!((check.threshold - 0.5).abs() < 1e-12);
        assert!((check.advantage - 0.6).abs() < 1e-12);
        assert!(check.acceptable_advantage);
        assert!(check.acceptable_stability);
        assert!(check.is_unique());
        assert_eq!(result.accepted_set(), vec![2]);
    }

    #[test]
    fn advantage_equal_to_threshold_is_acceptable() {
        // m = 2: DQ = 1, Q2 - Q1 = 1
        let pair = [entry(1, 0.0, 1, 1, 1), entry(0, 1.0, 2, 2, 2)];
        let check = CompromiseResult::evaluate(&pair).check().cloned().unwrap();
        assert_eq!(check.advantage, check.threshold);
        assert!(check.acceptable_advantage);
        assert_eq!(check.accepted, vec![1]);

        // m = 3: DQ = 0.5, Q2 - Q1 = 0.5
        let triple = [entry(0, 0.0, 1, 1, 1), entry(2, 0.5, 2, 2, 2), entry(1, 0.9, 3, 3, 3)];
        let check = CompromiseResult::evaluate(&triple).check().cloned().unwrap();
        assert_eq!(check.advantage, 0.5);
        assert_eq!(check.threshold, 0.5);
        assert!(check.acceptable_advantage);
        assert!(check.is_unique());
    }

    #[test]
    fn small_advantage_widens_set_to_threshold() {
        let table = [
            entry(3, 0.0, 1, 1, 1),
            entry(1, 0.13, 2, 2, 2),
            entry(0, 0.28, 3, 3, 3),
            entry(2, 0.34, 4, 4, 4),
        ];
        let check = CompromiseResult::evaluate(&table).check().cloned().unwrap();

        assert!(!check.acceptable_advantage);
        assert!(check.acceptable_stability);
        // DQ = 1/3, so 0.34 falls outside.
        assert_eq!(check.accepted, vec![3, 1, 0]);
    }

    #[test]
    fn unstable_leader_widens_set() {
        let table = [entry(0, 0.0, 2, 2, 1), entry(1, 1.0, 1, 1, 2)];
        let check = CompromiseResult::evaluate(&table).check().cloned().unwrap();

        assert!(check.acceptable_advantage);
        assert!(!check.acceptable_stability);
        assert_eq!(check.accepted, vec![0, 1]);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(CompromiseResult::NotApplicable { alternative: 0 }).unwrap();
        assert_eq!(json["status"], "not_applicable");
        assert_eq!(json["alternative"], 0);

        let json = serde_json::to_value(CompromiseResult::NoAlternatives).unwrap();
        assert_eq!(json["status"], "no_alternatives");
    }
}
