//! Report Sink Adapters
//!
//! - **TextReportSink** - Fixed-width tables for the terminal
//! - **JsonReportSink** - The full outcome as JSON

mod json_report_sink;
mod text_report_sink;

pub use json_report_sink::JsonReportSink;
pub use text_report_sink::TextReportSink;
