//! Report Sink Port - Rendering of a finished computation.

use crate::domain::foundation::DomainError;
use crate::domain::vikor::VikorOutcome;

/// Port for rendering a `VikorOutcome`.
///
/// Rendering is read-only: the outcome is never altered, only formatted.
pub trait ReportSink: Send + Sync {
    /// Renders the outcome into the sink's format.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::RenderFailed` if the outcome cannot be formatted.
    fn render(&self, outcome: &VikorOutcome) -> Result<String, DomainError>;
}
