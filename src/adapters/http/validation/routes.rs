//! HTTP routes for validation endpoints.

use axum::{routing::post, Router};

use super::handlers::{validate_issuance, validate_verifier, ValidationHandlers};

pub fn validation_routes(handlers: ValidationHandlers) -> Router {
    Router::new()
        .route("/issuance", post(validate_issuance))
        .route("/verifier", post(validate_verifier))
        .with_state(handlers)
}
