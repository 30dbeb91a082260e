//! Session domain module.
//!
//! A session correlates an orchestrator-initiated test with asynchronous
//! events that arrive later. It owns an open map of typed attributes, one of
//! which (the callback address) is mandatory.

mod attributes;
mod errors;

pub use attributes::{AttributeValue, ScalarAttribute, CALLBACK_ADDRESS, TRANSACTION_ID};
pub use errors::SessionError;
