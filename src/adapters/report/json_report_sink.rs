//! JSON Report Sink Adapter
//!
//! Serializes the whole `VikorOutcome`, every intermediate matrix included.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::vikor::VikorOutcome;
use crate::ports::ReportSink;

/// Machine readable report
#[derive(Debug, Clone, Copy)]
pub struct JsonReportSink {
    pretty: bool,
}

impl JsonReportSink {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for JsonReportSink {
    fn render(&self, outcome: &VikorOutcome) -> Result<String, DomainError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(outcome)
        } else {
            serde_json::to_string(outcome)
        };

        rendered.map_err(|e| {
            DomainError::new(
                ErrorCode::RenderFailed,
                format!("Failed to serialize outcome: {}", e),
            )
        })
    }
}
