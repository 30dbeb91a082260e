//! HTTP DTOs for validation endpoints.

use serde::{Deserialize, Serialize};

/// Issuance logs to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceValidationRequest {
    pub session_id: String,
    /// JSON envelope `{successful, count, logs}`
    pub text: String,
    #[serde(default)]
    pub expected: Option<String>,
}

/// Verifier event trail to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierValidationRequest {
    pub session_id: String,
    /// JSON envelope `{transaction_id, last_updated, events}`
    pub text: String,
    #[serde(default)]
    pub expected_event: Option<String>,
}
