//! CallbackDelivery port - Interface for reaching the orchestrator.
//!
//! The notifier hands a report and an opaque address to this port; the
//! protocol used to reach the address is the adapter's concern.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::report::Report;

/// Why a single delivery failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("Callback address is not usable: {0}")]
    InvalidAddress(String),

    #[error("Callback timed out after {0:?}")]
    Timeout(Duration),

    #[error("Callback unreachable: {0}")]
    Unreachable(String),

    #[error("Callback rejected with status {status}")]
    Rejected { status: u16 },
}

impl From<DeliveryError> for DomainError {
    fn from(err: DeliveryError) -> Self {
        DomainError::new(ErrorCode::DeliveryFailure, err.to_string())
    }
}

/// Port for delivering a report to an orchestrator callback address.
///
/// Implementations own the per-call upper bound on duration; callers do not
/// wrap deliveries in their own timeouts.
#[async_trait]
pub trait CallbackDelivery: Send + Sync {
    /// Delivers `report`, produced for `session_id`, to `address`.
    async fn deliver(
        &self,
        session_id: &SessionId,
        report: &Report,
        address: &str,
    ) -> Result<(), DeliveryError>;
}
