//! HTTP handlers for validation endpoints.
//!
//! Both return the report synchronously; nothing is delivered to callbacks.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::{IssuanceValidator, VerifierValidator};
use crate::domain::foundation::SessionId;

use super::dto::{IssuanceValidationRequest, VerifierValidationRequest};

#[derive(Clone)]
pub struct ValidationHandlers {
    issuance: Arc<IssuanceValidator>,
    verifier: Arc<VerifierValidator>,
}

impl ValidationHandlers {
    pub fn new(issuance: Arc<IssuanceValidator>, verifier: Arc<VerifierValidator>) -> Self {
        Self { issuance, verifier }
    }
}

/// POST /validation/issuance
pub async fn validate_issuance(
    State(handlers): State<ValidationHandlers>,
    Json(req): Json<IssuanceValidationRequest>,
) -> Response {
    let session_id = SessionId::from(req.session_id);
    match handlers
        .issuance
        .validate(&session_id, &req.text, req.expected.as_deref())
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /validation/verifier
pub async fn validate_verifier(
    State(handlers): State<ValidationHandlers>,
    Json(req): Json<VerifierValidationRequest>,
) -> Response {
    let session_id = SessionId::from(req.session_id);
    match handlers
        .verifier
        .validate(&session_id, &req.text, req.expected_event.as_deref())
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response(e),
    }
}
