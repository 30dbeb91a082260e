//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::domain::authorization::{build_authorization_request_uri, AuthorizationData};
use crate::domain::foundation::SessionId;
use crate::domain::session::TRANSACTION_ID;
use crate::ports::SessionRegistry;

use super::dto::{
    AttributeResponse, AuthorizationResponse, CreateSessionRequest, CreateSessionResponse,
    SessionListResponse, SetAttributeRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    registry: Arc<dyn SessionRegistry>,
    authorization_scheme: Arc<str>,
}

impl SessionHandlers {
    pub fn new(registry: Arc<dyn SessionRegistry>, authorization_scheme: impl Into<Arc<str>>) -> Self {
        Self {
            registry,
            authorization_scheme: authorization_scheme.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /sessions - Start a test session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let requested = req.session_id.map(SessionId::from);
    match handlers
        .registry
        .create_session(requested, &req.callback_address)
        .await
    {
        Ok(id) => {
            tracing::info!(session_id = %id, callback = %req.callback_address, "Session created");
            let response = CreateSessionResponse {
                session_id: id.into_inner(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /sessions - Snapshot of active session ids
pub async fn list_sessions(State(handlers): State<SessionHandlers>) -> Response {
    let ids = handlers.registry.list_active_session_ids().await;
    let response = SessionListResponse {
        session_ids: ids.into_iter().map(SessionId::into_inner).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// DELETE /sessions/:id - End a test session
pub async fn destroy_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let id = SessionId::from(session_id);
    handlers.registry.destroy_session(&id).await;
    tracing::info!(session_id = %id, "Session destroyed");
    StatusCode::NO_CONTENT.into_response()
}

/// GET /sessions/:id/attributes/:key
pub async fn get_attribute(
    State(handlers): State<SessionHandlers>,
    Path((session_id, key)): Path<(String, String)>,
) -> Response {
    let id = SessionId::from(session_id);
    match handlers.registry.get_attribute(&id, &key).await {
        Some(value) => {
            let response = AttributeResponse {
                value: value.to_scalar(),
                key,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Attribute", &format!("{}/{}", id, key))),
        )
            .into_response(),
    }
}

/// PUT /sessions/:id/attributes/:key
pub async fn set_attribute(
    State(handlers): State<SessionHandlers>,
    Path((session_id, key)): Path<(String, String)>,
    Json(req): Json<SetAttributeRequest>,
) -> Response {
    let id = SessionId::from(session_id);
    match handlers
        .registry
        .set_attribute(&id, &key, req.value.into())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /sessions/:id/authorization - Correlate a verifier transaction and
/// build the URI a wallet opens.
pub async fn start_authorization(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    Json(data): Json<AuthorizationData>,
) -> Response {
    let id = SessionId::from(session_id);
    let uri = match build_authorization_request_uri(&handlers.authorization_scheme, &data) {
        Ok(uri) => uri,
        Err(e) => return error_response(e),
    };

    if let Err(e) = handlers
        .registry
        .set_attribute(&id, TRANSACTION_ID, data.transaction_id.clone().into())
        .await
    {
        return error_response(e);
    }

    tracing::info!(
        session_id = %id,
        transaction_id = %data.transaction_id,
        "Authorization request prepared"
    );
    let response = AuthorizationResponse {
        authorization_request_uri: uri.to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
