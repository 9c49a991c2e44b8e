//! Assessment Source Adapters
//!
//! Implementations of the AssessmentSource port.
//!
//! ## Available Adapters
//!
//! - **FileAssessmentSource** - Reads JSON or YAML documents from disk
//! - **InMemoryAssessmentSource** - Serves a fixed assessment (sample, testing)

mod file_assessment_source;
mod in_memory_assessment_source;

pub use file_assessment_source::{DocumentFormat, FileAssessmentSource};
pub use in_memory_assessment_source::InMemoryAssessmentSource;
