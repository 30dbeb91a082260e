//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - Store of active test sessions and their attributes
//! - `CallbackDelivery` - Transport that hands reports back to the orchestrator

mod callback_delivery;
mod session_registry;

pub use callback_delivery::{CallbackDelivery, DeliveryError};
pub use session_registry::SessionRegistry;
