//! In-memory Assessment Source Adapter
//!
//! Hands out a fixed assessment. Backs the `--sample` option and tests.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentSource;

/// Serves a clone of an assessment held in memory
#[derive(Debug, Clone)]
pub struct InMemoryAssessmentSource {
    assessment: Assessment,
    label: String,
}

impl InMemoryAssessmentSource {
    pub fn new(assessment: Assessment, label: impl Into<String>) -> Self {
        Self {
            assessment,
            label: label.into(),
        }
    }

    /// The built-in sample of four experts, five criteria and four alternatives
    pub fn sample() -> Self {
        Self::new(Assessment::sample(), "sample")
    }
}

impl AssessmentSource for InMemoryAssessmentSource {
    fn load(&self) -> Result<Assessment, DomainError> {
        Ok(self.assessment.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_source_serves_sample() {
        let source = InMemoryAssessmentSource::sample();
        assert_eq!(source.describe(), "sample");
        assert_eq!(source.load().unwrap(), Assessment::sample());
    }

    #[test]
    fn test_load_returns_independent_copies() {
        let source = InMemoryAssessmentSource::new(Assessment::new(2, 2, 1), "grid");
        let first = source.load().unwrap().toggle_direction(0);
        assert!(source.load().unwrap().direction(0).is_benefit());
        assert!(!first.direction(0).is_benefit());
    }
}
