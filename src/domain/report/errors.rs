//! Report construction errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while building a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Item name '{name}' appears more than once at the same level")]
    DuplicateItemName { name: String },

    #[error("Item '{name}' could not be serialized: {reason}")]
    Serialization { name: String, reason: String },
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::DuplicateItemName { .. } => ErrorCode::InvalidArgument,
            ReportError::Serialization { .. } => ErrorCode::InternalError,
        }
    }

    pub(crate) fn serialization(name: impl Into<String>, err: serde_json::Error) -> Self {
        ReportError::Serialization {
            name: name.into(),
            reason: err.to_string(),
        }
    }
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
