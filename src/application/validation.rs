//! Validation services - turn caller-supplied evidence into reports.
//!
//! Neither validator touches the session registry; the session id is only
//! carried for logging.

use crate::domain::evidence::{CredentialOfferLogs, EvidenceError, PresentationEvents};
use crate::domain::foundation::SessionId;
use crate::domain::report::Report;

/// Validates credential issuance logs.
#[derive(Debug, Clone, Default)]
pub struct IssuanceValidator;

impl IssuanceValidator {
    pub fn new() -> Self {
        Self
    }

    /// Parses the issuance envelope and renders its log outcome.
    ///
    /// A missing `expected` value is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::MissingInput`] for blank evidence and
    /// [`EvidenceError::Malformed`] if it is not a valid envelope.
    pub fn validate(
        &self,
        session_id: &SessionId,
        evidence: &str,
        expected: Option<&str>,
    ) -> Result<Report, EvidenceError> {
        match expected {
            Some(expected) => {
                tracing::debug!(session_id = %session_id, expected, "Validating issuance logs")
            }
            None => tracing::warn!(session_id = %session_id, "No expected value supplied"),
        }

        if evidence.trim().is_empty() {
            return Err(EvidenceError::MissingInput("text"));
        }
        let logs = CredentialOfferLogs::parse(evidence)?;
        let outcome = logs.analyze();
        tracing::info!(
            session_id = %session_id,
            result = %outcome.result,
            entries = outcome.entries.len(),
            skipped = outcome.stats.skipped_count,
            "Issuance logs validated"
        );
        Ok(outcome.into_report()?)
    }
}

/// Validates a verifier's presentation event trail.
#[derive(Debug, Clone, Default)]
pub struct VerifierValidator;

impl VerifierValidator {
    pub fn new() -> Self {
        Self
    }

    /// Parses the event trail and judges it against `expected_event`.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Malformed`] if `evidence` is not a valid
    /// trail.
    pub fn validate(
        &self,
        session_id: &SessionId,
        evidence: &str,
        expected_event: Option<&str>,
    ) -> Result<Report, EvidenceError> {
        if expected_event.is_none() {
            tracing::debug!(session_id = %session_id, "No expected event, comparing responses");
        }

        if evidence.trim().is_empty() {
            return Err(EvidenceError::MissingInput("text"));
        }
        let events = PresentationEvents::parse(evidence)?;
        let assessment = events.assess(expected_event);
        if let Some(error) = &assessment.non_recoverable_error {
            tracing::warn!(
                session_id = %session_id,
                transaction_id = %events.transaction_id,
                error = %error,
                "Presentation validation failed"
            );
        }
        Ok(assessment.to_report(&events)?)
    }
}
