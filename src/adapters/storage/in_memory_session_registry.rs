//! In-Memory Session Registry Adapter
//!
//! Keeps active test sessions in a process-local map. Sessions do not
//! survive a restart and are not shared between instances.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::SessionId;
use crate::domain::session::{AttributeValue, SessionError, CALLBACK_ADDRESS};
use crate::ports::SessionRegistry;

type Attributes = HashMap<String, AttributeValue>;

/// In-memory session registry.
///
/// Every operation runs under one registry-wide mutex. The lock is never held
/// across an `.await` on anything but itself, so callback delivery always
/// happens outside it.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, Attributes>>>,
}

impl InMemorySessionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of active sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn create_session(
        &self,
        id: Option<SessionId>,
        callback_address: &str,
    ) -> Result<SessionId, SessionError> {
        if callback_address.trim().is_empty() {
            return Err(SessionError::invalid_argument(
                "callback_address",
                "A callback address must be provided",
            ));
        }

        let mut attributes = Attributes::new();
        attributes.insert(
            CALLBACK_ADDRESS.to_string(),
            AttributeValue::Text(callback_address.to_string()),
        );

        let mut sessions = self.sessions.lock().await;
        let id = match id.filter(|id| !id.as_str().trim().is_empty()) {
            Some(id) => id,
            None => loop {
                let candidate = SessionId::generate();
                if !sessions.contains_key(&candidate) {
                    break candidate;
                }
            },
        };
        if sessions.insert(id.clone(), attributes).is_some() {
            tracing::debug!(session_id = %id, "Re-initialised existing session");
        }
        Ok(id)
    }

    async fn destroy_session(&self, id: &SessionId) {
        self.sessions.lock().await.remove(id);
    }

    async fn get_attribute(&self, id: &SessionId, key: &str) -> Option<AttributeValue> {
        let sessions = self.sessions.lock().await;
        sessions.get(id).and_then(|attrs| attrs.get(key)).cloned()
    }

    async fn set_attribute(
        &self,
        id: &SessionId,
        key: &str,
        value: AttributeValue,
    ) -> Result<(), SessionError> {
        let mut sessions = self.sessions.lock().await;
        let attributes = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::not_found(id.clone()))?;
        attributes.insert(key.to_string(), value);
        Ok(())
    }

    async fn list_active_session_ids(&self) -> BTreeSet<SessionId> {
        self.sessions.lock().await.keys().cloned().collect()
    }
}
