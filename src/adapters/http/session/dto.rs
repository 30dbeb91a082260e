//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::session::ScalarAttribute;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a test session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    /// Absent is treated as blank and rejected by the registry.
    #[serde(default)]
    pub callback_address: String,
}

/// Request to set one attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAttributeRequest {
    pub value: ScalarAttribute,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub session_ids: Vec<String>,
}

/// A single attribute. `value` is `null` for structured content attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeResponse {
    pub key: String,
    pub value: Option<ScalarAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    pub authorization_request_uri: String,
}
