//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; [`router`] assembles them behind
//! request tracing and a request timeout.

pub mod error;
pub mod notification;
pub mod session;
pub mod validation;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::{IssuanceValidator, Notifier, VerifierValidator};
use crate::ports::SessionRegistry;

pub use error::{error_response, ErrorResponse};
pub use notification::{notification_routes, NotificationHandlers};
pub use session::{session_routes, SessionHandlers};
pub use validation::{validation_routes, ValidationHandlers};

/// Shared services behind every endpoint.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn SessionRegistry>,
    pub notifier: Arc<Notifier>,
    pub issuance: Arc<IssuanceValidator>,
    pub verifier: Arc<VerifierValidator>,
    pub authorization_scheme: String,
}

/// Builds the full application router.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .nest(
            "/sessions",
            session_routes(SessionHandlers::new(
                state.registry,
                state.authorization_scheme,
            )),
        )
        .nest("/input", notification_routes(NotificationHandlers::new(state.notifier)))
        .nest(
            "/validation",
            validation_routes(ValidationHandlers::new(state.issuance, state.verifier)),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
