//! Error responses shared by every HTTP adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: ErrorCode::NotFound.to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| {
            serde_json::Value::Object(
                err.details
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
        });
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidArgument | ErrorCode::ParseError => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::DeliveryFailure => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders any module error as a JSON error response.
pub fn error_response(err: impl Into<DomainError>) -> Response {
    let err = err.into();
    let status = status_for(err.code);
    if status.is_server_error() {
        tracing::error!(code = %err.code, message = %err.message, "Request failed");
    } else {
        tracing::debug!(code = %err.code, message = %err.message, "Request rejected");
    }
    (status, Json(ErrorResponse::from(&err))).into_response()
}
