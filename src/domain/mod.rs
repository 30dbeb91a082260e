//! Domain layer containing the adapter's rules and value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (session ids, error codes)
//! - `session` - Session attributes and session errors
//! - `report` - Report value object and builder
//! - `evidence` - Log analysis and presentation trail assessment
//! - `authorization` - Authorization request URI construction

pub mod authorization;
pub mod evidence;
pub mod foundation;
pub mod report;
pub mod session;
