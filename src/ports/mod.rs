//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentSource` - Loads expert judgments
//! - `ReportSink` - Renders ranking results

mod assessment_source;
mod report_sink;

pub use assessment_source::AssessmentSource;
pub use report_sink::ReportSink;
