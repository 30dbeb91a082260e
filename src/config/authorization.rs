//! Authorization request configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for authorization request URIs handed to wallets
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizationConfig {
    /// URI scheme wallets are registered for
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl AuthorizationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scheme.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTHORIZATION__SCHEME"));
        }
        Ok(())
    }
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
        }
    }
}

fn default_scheme() -> String {
    "openid4vp".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        assert_eq!(AuthorizationConfig::default().scheme, "openid4vp");
    }

    #[test]
    fn test_empty_scheme_rejected() {
        let config = AuthorizationConfig {
            scheme: " ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
