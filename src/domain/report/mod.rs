//! Report module - structured outcomes sent back to the orchestrator.
//!
//! Every notification and validation result is rendered through the same
//! builder: an overall [`TestResult`] plus ordered, optionally nested, named
//! content items.

mod content;
mod errors;
#[allow(clippy::module_inception)]
mod report;

pub use content::{ContentBody, ContentItem, ItemValue, APPLICATION_JSON, TEXT_PLAIN, UTF_8};
pub use errors::ReportError;
pub use report::{build_report, Report, ReportBuilder, TestResult, ValidationCounters};
