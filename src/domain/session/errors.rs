//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A precondition on caller-supplied data was violated.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// The session is not currently registered.
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

impl SessionError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<SessionId>) -> Self {
        SessionError::NotFound(id.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            SessionError::NotFound(_) => ErrorCode::NotFound,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            SessionError::InvalidArgument { field, .. } => {
                DomainError::new(code, message).with_detail("field", field)
            }
            SessionError::NotFound(id) => {
                DomainError::new(code, message).with_detail("session_id", id.into_inner())
            }
        }
    }
}
