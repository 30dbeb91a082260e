//! SessionRegistry port - Interface for the active test session store.
//!
//! The registry maps a session id to an open bag of typed attributes and
//! owns session lifecycle. Presence in the registry means "active"; there is
//! no implicit expiry.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::domain::foundation::SessionId;
use crate::domain::session::{AttributeValue, SessionError};

/// Port for creating, mutating and destroying test sessions.
///
/// Implementations must make every call atomic with respect to every other
/// call, and must never expose a session without its callback address.
///
/// # Example
///
/// ```ignore
/// let id = registry.create_session(None, "https://orchestrator/callback").await?;
/// registry.set_attribute(&id, TRANSACTION_ID, "tx-1".into()).await?;
/// registry.destroy_session(&id).await;
/// ```
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Registers a session with `callback_address` as its only attribute.
    ///
    /// Generates a fresh id when `id` is `None`. An existing id is
    /// re-initialised (last write wins).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidArgument` if `callback_address` is blank.
    async fn create_session(
        &self,
        id: Option<SessionId>,
        callback_address: &str,
    ) -> Result<SessionId, SessionError>;

    /// Removes the session; a no-op for unknown ids.
    async fn destroy_session(&self, id: &SessionId);

    /// Reads one attribute. `None` for both unknown sessions and unset keys.
    async fn get_attribute(&self, id: &SessionId, key: &str) -> Option<AttributeValue>;

    /// Writes one attribute on an existing session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` if the session is not registered.
    async fn set_attribute(
        &self,
        id: &SessionId,
        key: &str,
        value: AttributeValue,
    ) -> Result<(), SessionError>;

    /// Point-in-time snapshot of the active session ids.
    async fn list_active_session_ids(&self) -> BTreeSet<SessionId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SessionRegistry) {}
}
