//! Verifier Testbed - Test-bed adapter for credential issuance and presentation
//!
//! This crate lets a test orchestrator open sessions, wait for asynchronous
//! input that is delivered back to a per-session callback, and validate
//! issuer logs or verifier event trails into structured reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
