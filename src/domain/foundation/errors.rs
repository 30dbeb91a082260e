//! Error types shared across the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller errors
    InvalidArgument,
    ParseError,

    // Lookup errors
    NotFound,

    // Side-channel errors
    DeliveryFailure,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DeliveryFailure => "DELIVERY_FAILURE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an invalid-argument error for a specific field.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NotFound, "Session not found");
        assert_eq!(format!("{}", err), "[NOT_FOUND] Session not found");
    }

    #[test]
    fn invalid_argument_records_field() {
        let err = DomainError::invalid_argument("callback_address", "must not be empty");
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.details.get("field"), Some(&"callback_address".to_string()));
    }

    #[test]
    fn error_codes_display_screaming_case() {
        assert_eq!(ErrorCode::DeliveryFailure.to_string(), "DELIVERY_FAILURE");
        assert_eq!(ErrorCode::ParseError.to_string(), "PARSE_ERROR");
    }
}
