//! Assessment Source Port - Where expert judgments come from.
//!
//! The application loads an `Assessment` through this trait and never touches
//! files or formats itself. Adapters decide how judgments are stored.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::DomainError;

/// Port for loading an assessment.
///
/// # Contract
///
/// Implementations must:
/// - Return `ErrorCode::SourceUnavailable` when the source cannot be read
/// - Return `ErrorCode::InvalidDocument` when the content is malformed or
///   contains an unknown linguistic label
/// - Fill cells the source leaves out with the default terms
///
/// # Usage
///
/// ```rust,ignore
/// let source: Arc<dyn AssessmentSource> = Arc::new(FileAssessmentSource::new(path));
/// let assessment = source.load()?;
/// ```
pub trait AssessmentSource: Send + Sync {
    /// Loads the assessment.
    fn load(&self) -> Result<Assessment, DomainError>;

    /// Short description used in logs (a path, "sample", ...).
    fn describe(&self) -> String;
}
