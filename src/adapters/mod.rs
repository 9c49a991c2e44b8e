//! Adapters - Implementations of port interfaces.
//!
//! - `source` - Where assessments are loaded from
//! - `report` - How ranking results are rendered

pub mod report;
pub mod source;

pub use report::{JsonReportSink, TextReportSink};
pub use source::{DocumentFormat, FileAssessmentSource, InMemoryAssessmentSource};
