//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session registry implementations (in-memory)
//! - `callback` - Report delivery to orchestrator endpoints (HTTP)
//! - `http` - REST endpoints exposing the application services

pub mod callback;
pub mod http;
pub mod storage;

pub use callback::{CallbackPayload, HttpCallbackDelivery};
pub use storage::InMemorySessionRegistry;
