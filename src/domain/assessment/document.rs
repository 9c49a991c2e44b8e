//! Serialized form of an assessment.
//!
//! Labels are validated while deserializing. Rows may be shorter than the
//! declared counts (and cells may be `null`); such cells take the default
//! term. Rows longer than the declared counts are rejected, as are counts
//! whose grid would exceed [`MAX_CELLS`].

use serde::{Deserialize, Serialize};

use super::Assessment;
use crate::domain::foundation::{
    CriterionDirection, ImportanceTerm, PerformanceTerm, StrategyWeight, ValidationError,
};

/// Wire representation of an [`Assessment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDocument {
    pub alternatives: usize,
    pub criteria: usize,
    pub experts: usize,

    #[serde(default)]
    pub criteria_directions: Vec<CriterionDirection>,

    /// Indexed `[expert][criterion]`.
    #[serde(default)]
    pub criteria_weights: Vec<Vec<Option<ImportanceTerm>>>,

    /// Indexed `[expert][alternative][criterion]`.
    #[serde(default)]
    pub performance: Vec<Vec<Vec<Option<PerformanceTerm>>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_weight: Option<StrategyWeight>,
}

/// Upper bound on `max(A,1) * max(C,1) * max(E,1)` for a loaded document.
pub const MAX_CELLS: usize = 1_000_000;

fn check_counts(doc: &AssessmentDocument) -> Result<(), ValidationError> {
    let cells = doc
        .alternatives
        .max(1)
        .checked_mul(doc.criteria.max(1))
        .and_then(|n| n.checked_mul(doc.experts.max(1)));

    match cells {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        other => Err(ValidationError::out_of_range(
            "cells",
            1.0,
            MAX_CELLS as f64,
            other.map_or(f64::INFINITY, |n| n as f64),
        )),
    }
}

fn check_len(field: &str, len: usize, declared: usize) -> Result<(), ValidationError> {
    if len > declared {
        return Err(ValidationError::invalid_format(
            field,
            format!("expected at most {} entries, got {}", declared, len),
        ));
    }
    Ok(())
}

impl TryFrom<AssessmentDocument> for Assessment {
    type Error = ValidationError;

    fn try_from(doc: AssessmentDocument) -> Result<Self, Self::Error> {
        check_counts(&doc)?;
        check_len("criteria_directions", doc.criteria_directions.len(), doc.criteria)?;
        check_len("criteria_weights", doc.criteria_weights.len(), doc.experts)?;
        check_len("performance", doc.performance.len(), doc.experts)?;

        let mut assessment = Assessment::new(doc.alternatives, doc.criteria, doc.experts);

        for (j, direction) in doc.criteria_directions.into_iter().enumerate() {
            assessment = assessment.with_direction(j, direction);
        }

        for (e, row) in doc.criteria_weights.into_iter().enumerate() {
            check_len(&format!("criteria_weights[{}]", e), row.len(), doc.criteria)?;
            for (j, term) in row.into_iter().enumerate() {
                if let Some(term) = term {
                    assessment = assessment.with_weight_term(e, j, term);
                }
            }
        }

        for (e, block) in doc.performance.into_iter().enumerate() {
            check_len(&format!("performance[{}]", e), block.len(), doc.alternatives)?;
            for (a, row) in block.into_iter().enumerate() {
                check_len(&format!("performance[{}][{}]", e, a), row.len(), doc.criteria)?;
                for (j, term) in row.into_iter().enumerate() {
                    if let Some(term) = term {
                        assessment = assessment.with_performance_term(e, a, j, term);
                    }
                }
            }
        }

        if let Some(weight) = doc.strategy_weight {
            assessment = assessment.with_strategy_weight(weight);
        }

        Ok(assessment)
    }
}

impl From<Assessment> for AssessmentDocument {
    fn from(assessment: Assessment) -> Self {
        let (a_count, c_count, e_count) = (
            assessment.alternative_count(),
            assessment.criterion_count(),
            assessment.expert_count(),
        );

        Self {
            alternatives: a_count,
            criteria: c_count,
            experts: e_count,
            criteria_directions: assessment.directions().to_vec(),
            criteria_weights: (0..e_count)
                .map(|e| {
                    (0..c_count)
                        .map(|j| Some(assessment.weight_term(e, j)))
                        .collect()
                })
                .collect(),
            performance: (0..e_count)
                .map(|e| {
                    (0..a_count)
                        .map(|a| {
                            (0..c_count)
                                .map(|j| Some(assessment.performance_term(e, a, j)))
                                .collect()
                        })
                        .collect()
                })
                .collect(),
            strategy_weight: assessment.strategy_weight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_document_with_defaults() {
        let json = r#"{
            "alternatives": 2,
            "criteria": 2,
            "experts": 1,
            "criteria_directions": ["cost"],
            "criteria_weights": [["H", null]],
            "performance": [[["G"]]]
        }"#;

        let assessment: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.direction(0), CriterionDirection::Cost);
        assert_eq!(assessment.direction(1), CriterionDirection::Benefit);
        assert_eq!(assessment.weight_term(0, 0), ImportanceTerm::High);
        assert_eq!(assessment.weight_term(0, 1), ImportanceTerm::Medium);
        assert_eq!(assessment.performance_term(0, 0, 0), PerformanceTerm::Good);
        assert_eq!(assessment.performance_term(0, 1, 1), PerformanceTerm::Fair);
        assert!(assessment.strategy_weight().is_none());
    }

    #[test]
    fn rejects_unknown_labels() {
        let json = r#"{
            "alternatives": 1, "criteria": 1, "experts": 1,
            "criteria_weights": [["HUGE"]]
        }"#;
        let err = serde_json::from_str::<Assessment>(json).unwrap_err();
        assert!(err.to_string().contains("HUGE"));
    }

    #[test]
    fn rejects_rows_longer_than_declared() {
        let json = r#"{
            "alternatives": 1, "criteria": 1, "experts": 1,
            "criteria_weights": [["H", "L"]]
        }"#;
        let err = serde_json::from_str::<Assessment>(json).unwrap_err();
        assert!(err.to_string().contains("criteria_weights[0]"));
    }

    #[test]
    fn overlong_row_error_names_expert_and_alternative() {
        let json = r#"{
            "alternatives": 2, "criteria": 1, "experts": 2,
            "performance": [[["G"]], [["G"], ["F", "P"]]]
        }"#;
        let err = serde_json::from_str::<Assessment>(json).unwrap_err();
        assert!(err.to_string().contains("performance[1][1]"), "{}", err);
    }

    #[test]
    fn rejects_counts_beyond_cell_budget() {
        let json = r#"{"alternatives": 1, "criteria": 18446744073709551615, "experts": 1}"#;
        let err = serde_json::from_str::<Assessment>(json).unwrap_err();
        assert!(err.to_string().contains("cells"), "{}", err);

        let json = r#"{"alternatives": 1001, "criteria": 1000, "experts": 0}"#;
        assert!(serde_json::from_str::<Assessment>(json).is_err());
    }

    #[test]
    fn accepts_counts_at_cell_budget() {
        let doc = AssessmentDocument {
            alternatives: 100,
            criteria: 100,
            experts: 100,
            criteria_directions: Vec::new(),
            criteria_weights: Vec::new(),
            performance: Vec::new(),
            strategy_weight: None,
        };
        assert_eq!(check_counts(&doc), Ok(()));
        assert!(check_counts(&AssessmentDocument { experts: 101, ..doc }).is_err());
    }

    #[test]
    fn rejects_out_of_range_strategy_weight() {
        let json = r#"{
            "alternatives": 1, "criteria": 1, "experts": 1,
            "strategy_weight": 1.5
        }"#;
        assert!(serde_json::from_str::<Assessment>(json).is_err());
    }

    #[test]
    fn serialized_document_is_dense() {
        let assessment = Assessment::new(1, 2, 1);
        let doc = AssessmentDocument::from(assessment.clone());
        assert_eq!(doc.criteria_weights, vec![vec![Some(ImportanceTerm::Medium); 2]]);
        assert_eq!(doc.performance[0][0].len(), 2);

        let json = serde_json::to_string(&assessment).unwrap();
        let back: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assessment);
    }
}
