//! Storage Adapters
//!
//! Implementations of the SessionRegistry port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRegistry** - Process-local map behind one mutex
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionRegistry;
//!
//! let registry = Arc::new(InMemorySessionRegistry::new());
//! ```

mod in_memory_session_registry;

pub use in_memory_session_registry::InMemorySessionRegistry;
