//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_session, destroy_session, get_attribute, list_sessions, set_attribute,
    start_authorization, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session).get(list_sessions))
        .route("/:id", axum::routing::delete(destroy_session))
        .route("/:id/attributes/:key", get(get_attribute).put(set_attribute))
        .route("/:id/authorization", post(start_authorization))
        .with_state(handlers)
}
