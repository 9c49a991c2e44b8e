//! Command handlers.

mod evaluate_assessment;

pub use evaluate_assessment::{
    EvaluateAssessmentCommand, EvaluateAssessmentHandler, EvaluateAssessmentResult,
};
