//! Credential issuance evidence envelope.

use serde::Deserialize;

use super::errors::EvidenceError;
use super::log_outcome::{analyze_logs, LogOutcome};

/// Logs collected from a credential issuer during an offer flow.
///
/// Unknown fields are ignored; all three known fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialOfferLogs {
    pub successful: bool,
    pub count: u64,
    pub logs: Vec<String>,
}

impl CredentialOfferLogs {
    /// Parses the JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Malformed`] if the text is not JSON or does not
    /// match the envelope.
    pub fn parse(text: &str) -> Result<Self, EvidenceError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn analyze(&self) -> LogOutcome {
        analyze_logs(self.successful, self.count, &self.logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_envelope_and_ignores_unknown_fields() {
        let logs = CredentialOfferLogs::parse(
            r#"{"successful": true, "count": 1, "logs": ["x"], "issuer": "demo"}"#,
        )
        .unwrap();
        assert!(logs.successful);
        assert_eq!(logs.count, 1);
        assert_eq!(logs.logs, vec!["x".to_string()]);
    }

    #[test]
    fn rejects_non_json() {
        let err = CredentialOfferLogs::parse("not json").unwrap_err();
        assert!(matches!(err, EvidenceError::Malformed(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(CredentialOfferLogs::parse(r#"{"successful": true, "count": 1}"#).is_err());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(
            CredentialOfferLogs::parse(r#"{"successful": "yes", "count": 1, "logs": []}"#).is_err()
        );
        assert!(
            CredentialOfferLogs::parse(r#"{"successful": true, "count": -1, "logs": []}"#).is_err()
        );
    }
}
