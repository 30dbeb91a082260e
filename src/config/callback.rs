//! Orchestrator callback configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the HTTP client that delivers reports to the orchestrator.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackConfig {
    /// Upper bound on a single delivery, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Outbound proxy
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Outbound proxy settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Proxy host name
    #[serde(default)]
    pub server: String,

    pub port: Option<u16>,

    #[serde(default)]
    pub kind: ProxyKind,

    #[serde(default)]
    pub auth_enabled: bool,

    pub username: Option<String>,

    pub password: Option<Secret<String>>,

    /// Hosts that bypass the proxy (comma-separated)
    pub non_proxy_hosts: Option<String>,
}

/// Scheme used to reach the proxy
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProxyKind {
    #[default]
    Http,
    Https,
}

impl CallbackConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate callback configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidCallbackTimeout);
        }
        self.proxy.validate()
    }
}

impl ProxyConfig {
    /// Proxy URL, e.g. `http://proxy.local:3128`
    pub fn url(&self) -> String {
        let scheme = match self.kind {
            ProxyKind::Http => "http",
            ProxyKind::Https => "https",
        };
        format!("{}://{}:{}", scheme, self.server, self.port.unwrap_or_default())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.server.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PROXY__SERVER"));
        }
        if !matches!(self.port, Some(p) if p > 0) {
            return Err(ValidationError::InvalidProxyPort);
        }
        if self.auth_enabled && self.username.as_ref().map_or(true, |u| u.is_empty()) {
            return Err(ValidationError::MissingRequired("PROXY__USERNAME"));
        }
        Ok(())
    }
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            proxy: ProxyConfig::default(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
