//! Evidence interpretation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::ReportError;

/// Hard failures while interpreting caller-supplied evidence.
///
/// A single malformed log line inside a well-formed envelope is not an
/// error; it is counted and skipped.
#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("Required input '{0}' is missing")]
    MissingInput(&'static str),

    #[error("Malformed evidence envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl EvidenceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvidenceError::MissingInput(_) => ErrorCode::InvalidArgument,
            EvidenceError::Malformed(_) => ErrorCode::ParseError,
            EvidenceError::Report(e) => e.code(),
        }
    }
}

impl From<EvidenceError> for DomainError {
    fn from(err: EvidenceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
