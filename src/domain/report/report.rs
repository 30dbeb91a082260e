//! The report value object and its builder.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::content::{render_named, ContentItem, ItemValue};
use super::errors::ReportError;

/// Overall outcome of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestResult {
    Success,
    Failure,
    Warning,
}

impl TestResult {
    /// `Success` when `ok`, `Failure` otherwise.
    pub fn from_success(ok: bool) -> Self {
        if ok {
            TestResult::Success
        } else {
            TestResult::Failure
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TestResult::Success => "SUCCESS",
            TestResult::Failure => "FAILURE",
            TestResult::Warning => "WARNING",
        };
        write!(f, "{}", s)
    }
}

/// Error and warning tallies attached to validation reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCounters {
    pub errors: u64,
    pub warnings: u64,
}

/// Immutable, possibly nested, named outcome handed back to the orchestrator.
///
/// Reports are only produced through [`ReportBuilder`] or [`build_report`], so
/// item names are guaranteed unique at every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    result: TestResult,
    items: Vec<ContentItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    counters: Option<ValidationCounters>,
}

impl Report {
    /// Starts building a report with the given outcome.
    pub fn builder(result: TestResult) -> ReportBuilder {
        ReportBuilder::new(result)
    }

    pub fn result(&self) -> TestResult {
        self.result
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn counters(&self) -> Option<ValidationCounters> {
        self.counters
    }

    /// Looks up a top-level item by name.
    pub fn item(&self, name: &str) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.name() == Some(name))
    }
}

/// Accumulates named items; validation happens once in [`ReportBuilder::build`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    result: TestResult,
    items: Vec<(String, ItemValue)>,
    counters: Option<ValidationCounters>,
}

impl ReportBuilder {
    pub fn new(result: TestResult) -> Self {
        Self {
            result,
            items: Vec::new(),
            counters: None,
        }
    }

    /// Appends a named item.
    pub fn item(mut self, name: impl Into<String>, value: impl Into<ItemValue>) -> Self {
        self.items.push((name.into(), value.into()));
        self
    }

    /// Appends a named item holding `value` serialized as JSON.
    pub fn json_item<T: Serialize + ?Sized>(
        self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, ReportError> {
        let name = name.into();
        let value = ItemValue::json(value).map_err(|e| ReportError::serialization(&name, e))?;
        Ok(self.item(name, value))
    }

    pub fn counters(mut self, counters: ValidationCounters) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Renders all items, failing on a duplicate name at any level.
    pub fn build(self) -> Result<Report, ReportError> {
        Ok(Report {
            result: self.result,
            items: render_named(self.items)?,
            counters: self.counters,
        })
    }
}

/// Renders `items` in order into a report with the given outcome.
///
/// # Errors
///
/// Returns [`ReportError::DuplicateItemName`] if two items share a name at
/// the same nesting level.
pub fn build_report(
    result: TestResult,
    items: impl IntoIterator<Item = (String, ItemValue)>,
) -> Result<Report, ReportError> {
    items
        .into_iter()
        .fold(ReportBuilder::new(result), |builder, (name, value)| {
            builder.item(name, value)
        })
        .build()
}
