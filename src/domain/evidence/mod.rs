//! Evidence module - interpreting caller-supplied test evidence.
//!
//! - `log_outcome` - Grammar-based log analysis into a structured outcome
//! - `issuance` - Credential issuance log envelope
//! - `presentation` - Verifier presentation event trail and its rules

mod errors;
mod issuance;
mod log_outcome;
mod presentation;

pub use errors::EvidenceError;
pub use issuance::CredentialOfferLogs;
pub use log_outcome::{
    analyze_logs, LogEntry, LogLevel, LogOutcome, LogStats, LOGS_ITEM, LOG_STATS_ITEM,
};
pub use presentation::{
    PresentationAssessment, PresentationEvent, PresentationEvents, EXPECT_ATTESTATION_ERROR,
    EXPECT_CERTIFICATE_ERROR, NON_RECOVERABLE_ERRORS_ITEM, VALIDATION_WARNINGS_ITEM,
    VERIFIER_LOGS_ITEM,
};
