//! Assessment Module - the source-of-truth judgments.
//!
//! # Components
//!
//! - `Assessment` - Counts, criterion directions and every expert judgment
//! - `AssessmentBuilder` - Sparse construction with default fill
//! - `AssessmentDocument` - JSON/YAML representation with label validation
//!
//! Edits are value replacements (`with_*`, `toggle_direction`, `resized`);
//! nothing derived from the judgments is stored here.

mod document;
mod sample;
mod state;

pub use document::{AssessmentDocument, MAX_CELLS};
pub use state::{Assessment, AssessmentBuilder};
