//! Presentation (verifier) evidence: the event trail of one verifier
//! transaction and the rules for judging it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::EvidenceError;
use crate::domain::report::{Report, ReportError, TestResult, ValidationCounters};

pub const VERIFIER_LOGS_ITEM: &str = "Verifier's Logs";
pub const NON_RECOVERABLE_ERRORS_ITEM: &str = "Non-recoverable errors";
pub const VALIDATION_WARNINGS_ITEM: &str = "Validation warnings";

/// Expected-event value requiring a failed attestation status check.
pub const EXPECT_ATTESTATION_ERROR: &str = "attestation_error";

/// Expected-event value requiring the wallet to fail posting its response.
pub const EXPECT_CERTIFICATE_ERROR: &str = "certificate_error";

/// Event trail reported by a verifier for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationEvents {
    pub transaction_id: String,
    pub last_updated: i64,
    pub events: Vec<PresentationEvent>,
}

/// A single verifier event, discriminated by its `event` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum PresentationEvent {
    #[serde(rename = "Transaction initialized")]
    TransactionInitialized {
        timestamp: String,
        response: Value,
        actor: String,
    },
    #[serde(rename = "Request object retrieved")]
    RequestObjectRetrieved {
        timestamp: String,
        jwt: String,
        actor: String,
    },
    #[serde(rename = "FailedToRetrieve request")]
    FailedToRetrieveRequestObject {
        timestamp: String,
        cause: String,
        actor: String,
    },
    #[serde(rename = "Failed to retrieve presentation definition")]
    FailedToRetrievePresentationDefinition {
        timestamp: String,
        cause: String,
        actor: String,
    },
    #[serde(rename = "Wallet response posted")]
    WalletResponsePosted {
        timestamp: String,
        wallet_response: Value,
        #[serde(default)]
        verifier_response: Option<Value>,
        actor: String,
    },
    #[serde(rename = "Wallet failed to post response")]
    WalletFailedToPostResponse {
        timestamp: String,
        cause: String,
        actor: String,
    },
    #[serde(rename = "Verifier got wallet response")]
    VerifierGotWalletResponse {
        timestamp: String,
        wallet_response: Value,
        actor: String,
    },
    #[serde(rename = "Verifier failed to get wallet")]
    VerifierFailedToGetWalletResponse {
        timestamp: String,
        cause: String,
        actor: String,
    },
    #[serde(rename = "Presentation expired")]
    PresentationExpired { timestamp: String, actor: String },
    #[serde(rename = "Attestation status check succeeded")]
    AttestationStatusCheckSuccessful {
        timestamp: String,
        status_reference: Value,
        actor: String,
    },
    #[serde(rename = "Attestation status check failed")]
    AttestationStatusCheckFailed {
        timestamp: String,
        #[serde(default)]
        status_reference: Option<Value>,
        #[serde(default)]
        cause: Option<String>,
        actor: String,
    },
}

impl PresentationEvent {
    /// The wire label of this event.
    pub fn label(&self) -> &'static str {
        match self {
            PresentationEvent::TransactionInitialized { .. } => "Transaction initialized",
            PresentationEvent::RequestObjectRetrieved { .. } => "Request object retrieved",
            PresentationEvent::FailedToRetrieveRequestObject { .. } => "FailedToRetrieve request",
            PresentationEvent::FailedToRetrievePresentationDefinition { .. } => {
                "Failed to retrieve presentation definition"
            }
            PresentationEvent::WalletResponsePosted { .. } => "Wallet response posted",
            PresentationEvent::WalletFailedToPostResponse { .. } => "Wallet failed to post response",
            PresentationEvent::VerifierGotWalletResponse { .. } => "Verifier got wallet response",
            PresentationEvent::VerifierFailedToGetWalletResponse { .. } => {
                "Verifier failed to get wallet"
            }
            PresentationEvent::PresentationExpired { .. } => "Presentation expired",
            PresentationEvent::AttestationStatusCheckSuccessful { .. } => {
                "Attestation status check succeeded"
            }
            PresentationEvent::AttestationStatusCheckFailed { .. } => {
                "Attestation status check failed"
            }
        }
    }

    /// The warning detail for failure-type events; `None` for the rest.
    fn warning(&self) -> Option<Option<String>> {
        match self {
            PresentationEvent::AttestationStatusCheckFailed { cause, .. } => Some(cause.clone()),
            PresentationEvent::WalletFailedToPostResponse { cause, .. }
            | PresentationEvent::FailedToRetrievePresentationDefinition { cause, .. }
            | PresentationEvent::FailedToRetrieveRequestObject { cause, .. }
            | PresentationEvent::VerifierFailedToGetWalletResponse { cause, .. } => {
                Some(Some(cause.clone()))
            }
            PresentationEvent::PresentationExpired { actor, .. } => Some(Some(actor.clone())),
            _ => None,
        }
    }
}

impl PresentationEvents {
    /// Parses the JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Malformed`] for invalid JSON, missing fields or
    /// unknown event labels.
    pub fn parse(text: &str) -> Result<Self, EvidenceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Failure-type events keyed by label, in first-seen order. A later event
    /// with the same label replaces the earlier detail.
    pub fn warnings(&self) -> Vec<(&'static str, Option<String>)> {
        let mut warnings: Vec<(&'static str, Option<String>)> = Vec::new();
        for event in &self.events {
            let Some(detail) = event.warning() else {
                continue;
            };
            match warnings.iter_mut().find(|(label, _)| *label == event.label()) {
                Some(existing) => existing.1 = detail,
                None => warnings.push((event.label(), detail)),
            }
        }
        warnings
    }

    fn first_wallet_response(&self) -> Option<&Value> {
        self.events.iter().find_map(|e| match e {
            PresentationEvent::WalletResponsePosted {
                wallet_response, ..
            } => Some(wallet_response),
            _ => None,
        })
    }

    fn first_verifier_response(&self) -> Option<&Value> {
        self.events.iter().find_map(|e| match e {
            PresentationEvent::VerifierGotWalletResponse {
                wallet_response, ..
            } => Some(wallet_response),
            _ => None,
        })
    }

    /// Judges the trail against an optional expected failure.
    pub fn assess(&self, expected_event: Option<&str>) -> PresentationAssessment {
        let warnings = self.warnings();
        // A failure event without a cause does not satisfy an expectation.
        let has_warning = |label: &str| {
            warnings
                .iter()
                .any(|(l, detail)| *l == label && detail.is_some())
        };

        let error = match expected_event {
            Some(EXPECT_ATTESTATION_ERROR) => (!has_warning("Attestation status check failed"))
                .then(|| {
                    "Attestation step should fail to post response but did anyways or/and other \
                     error occurred (ex: Presentation Timeout)"
                        .to_string()
                }),
            Some(EXPECT_CERTIFICATE_ERROR) => (!has_warning("Wallet failed to post response"))
                .then(|| {
                    "Wallet should fail to post response but did anyways or/and other error \
                     occurred (ex: Presentation Timeout)"
                        .to_string()
                }),
            _ => {
                let verifier = self.first_verifier_response();
                let matches = verifier.is_some() && verifier == self.first_wallet_response();
                (!matches).then(|| "Wallet query and verifier query do not match".to_string())
            }
        };

        PresentationAssessment {
            non_recoverable_error: error,
            warnings,
        }
    }
}

/// Outcome of judging a presentation trail.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationAssessment {
    pub non_recoverable_error: Option<String>,
    pub warnings: Vec<(&'static str, Option<String>)>,
}

#[derive(Serialize)]
struct ValidationWarnings<'a> {
    warnings: Vec<Warning<'a>>,
}

#[derive(Serialize)]
struct Warning<'a> {
    warning: Option<&'a str>,
}

impl PresentationAssessment {
    pub fn result(&self) -> TestResult {
        TestResult::from_success(self.non_recoverable_error.is_none())
    }

    /// Renders the assessment, embedding the full trail as JSON.
    pub fn to_report(&self, events: &PresentationEvents) -> Result<Report, ReportError> {
        let mut builder = Report::builder(self.result()).json_item(VERIFIER_LOGS_ITEM, events)?;

        if let Some(error) = &self.non_recoverable_error {
            builder = builder.json_item(NON_RECOVERABLE_ERRORS_ITEM, error)?;
        }

        if !self.warnings.is_empty() {
            let mut distinct: Vec<Option<&str>> = Vec::new();
            for (_, detail) in &self.warnings {
                let detail = detail.as_deref();
                if !distinct.contains(&detail) {
                    distinct.push(detail);
                }
            }
            let payload = ValidationWarnings {
                warnings: distinct.into_iter().map(|warning| Warning { warning }).collect(),
            };
            builder = builder.json_item(VALIDATION_WARNINGS_ITEM, &payload)?;
        }

        builder
            .counters(ValidationCounters {
                errors: u64::from(self.non_recoverable_error.is_some()),
                warnings: self.warnings.len() as u64,
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trail(events: Value) -> PresentationEvents {
        serde_json::from_value(json!({
            "transaction_id": "tx-1",
            "last_updated": 1700000000,
            "events": events,
        }))
        .unwrap()
    }

    fn posted(response: Value) -> Value {
        json!({
            "event": "Wallet response posted",
            "timestamp": "t1",
            "actor": "Wallet",
            "wallet_response": response,
        })
    }

    fn received(response: Value) -> Value {
        json!({
            "event": "Verifier got wallet response",
            "timestamp": "t2",
            "actor": "Verifier",
            "wallet_response": response,
        })
    }

    #[test]
    fn matching_responses_succeed() {
        let events = trail(json!([posted(json!({"vp": "a"})), received(json!({"vp": "a"}))]));
        let assessment = events.assess(None);

        assert_eq!(assessment.non_recoverable_error, None);
        assert_eq!(assessment.result(), TestResult::Success);
    }

    #[test]
    fn mismatched_responses_fail() {
        let events = trail(json!([posted(json!({"vp": "a"})), received(json!({"vp": "b"}))]));
        let assessment = events.assess(None);

        assert_eq!(
            assessment.non_recoverable_error.as_deref(),
            Some("Wallet query and verifier query do not match")
        );
    }

    #[test]
    fn missing_verifier_response_fails() {
        let events = trail(json!([posted(json!({"vp": "a"}))]));
        assert!(events.assess(None).non_recoverable_error.is_some());
    }

    #[test]
    fn expected_attestation_error_requires_failed_check() {
        let failed = json!({
            "event": "Attestation status check failed",
            "timestamp": "t",
            "actor": "Verifier",
            "cause": "revoked",
        });
        let events = trail(json!([failed]));
        let assessment = events.assess(Some(EXPECT_ATTESTATION_ERROR));

        assert_eq!(assessment.non_recoverable_error, None);
        assert_eq!(
            assessment.warnings,
            vec![("Attestation status check failed", Some("revoked".to_string()))]
        );

        let events = trail(json!([posted(json!(1)), received(json!(1))]));
        assert!(events
            .assess(Some(EXPECT_ATTESTATION_ERROR))
            .non_recoverable_error
            .is_some());
    }

    #[test]
    fn failed_attestation_without_cause_does_not_meet_expectation() {
        let failed = json!({
            "event": "Attestation status check failed",
            "timestamp": "t",
            "actor": "Verifier",
        });
        let events = trail(json!([failed]));
        let assessment = events.assess(Some(EXPECT_ATTESTATION_ERROR));

        assert!(assessment.non_recoverable_error.is_some());
        assert_eq!(assessment.result(), TestResult::Failure);
        assert_eq!(
            assessment.warnings,
            vec![("Attestation status check failed", None)]
        );
    }

    #[test]
    fn expected_certificate_error_requires_failed_post() {
        let failed = json!({
            "event": "Wallet failed to post response",
            "timestamp": "t",
            "actor": "Wallet",
            "cause": "bad certificate",
        });
        let events = trail(json!([failed]));
        assert_eq!(
            events.assess(Some(EXPECT_CERTIFICATE_ERROR)).non_recoverable_error,
            None
        );
    }

    #[test]
    fn later_warning_overwrites_earlier_with_same_label() {
        let first = json!({"event": "Presentation expired", "timestamp": "t", "actor": "A"});
        let second = json!({"event": "Presentation expired", "timestamp": "t", "actor": "B"});
        let events = trail(json!([first, second]));

        assert_eq!(
            events.warnings(),
            vec![("Presentation expired", Some("B".to_string()))]
        );
    }

    #[test]
    fn unknown_event_label_is_malformed() {
        let text = r#"{"transaction_id":"t","last_updated":0,"events":[{"event":"Nope","timestamp":"t","actor":"a"}]}"#;
        assert!(matches!(
            PresentationEvents::parse(text),
            Err(EvidenceError::Malformed(_))
        ));
    }

    #[test]
    fn report_carries_logs_errors_warnings_and_counters() {
        let expired = json!({"event": "Presentation expired", "timestamp": "t", "actor": "Verifier"});
        let events = trail(json!([expired]));
        let report = events.assess(None).to_report(&events).unwrap();

        assert_eq!(report.result(), TestResult::Failure);
        assert!(report.item(VERIFIER_LOGS_ITEM).is_some());
        assert!(report.item(NON_RECOVERABLE_ERRORS_ITEM).is_some());

        let warnings: Value = serde_json::from_str(
            report.item(VALIDATION_WARNINGS_ITEM).unwrap().as_text().unwrap(),
        )
        .unwrap();
        assert_eq!(warnings, json!({"warnings": [{"warning": "Verifier"}]}));
        assert_eq!(
            report.counters(),
            Some(ValidationCounters {
                errors: 1,
                warnings: 1
            })
        );
    }

    #[test]
    fn successful_report_omits_error_and_warning_items() {
        let events = trail(json!([posted(json!("x")), received(json!("x"))]));
        let report = events.assess(None).to_report(&events).unwrap();

        assert_eq!(report.result(), TestResult::Success);
        assert_eq!(report.items().len(), 1);
        assert_eq!(report.counters(), Some(ValidationCounters::default()));
    }

    #[test]
    fn logs_item_round_trips_event_labels() {
        let events = trail(json!([posted(json!("x"))]));
        let report = events.assess(None).to_report(&events).unwrap();
        let logs: Value =
            serde_json::from_str(report.item(VERIFIER_LOGS_ITEM).unwrap().as_text().unwrap())
                .unwrap();
        assert_eq!(logs["events"][0]["event"], "Wallet response posted");
    }
}
