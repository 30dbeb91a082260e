//! HTTP callback delivery.
//!
//! POSTs `{"session_id": .., "report": ..}` as JSON to the session's callback
//! address. The client-wide timeout bounds each delivery.

use async_trait::async_trait;
use reqwest::{Client, NoProxy, Proxy, Url};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::CallbackConfig;
use crate::domain::foundation::SessionId;
use crate::domain::report::Report;
use crate::ports::{CallbackDelivery, DeliveryError};

/// JSON body sent to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub session_id: SessionId,
    pub report: Report,
}

/// Errors raised while building the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("Invalid proxy configuration: {0}")]
    Proxy(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// reqwest-backed [`CallbackDelivery`].
#[derive(Debug, Clone)]
pub struct HttpCallbackDelivery {
    client: Client,
    timeout: Duration,
}

impl HttpCallbackDelivery {
    /// Builds the client from callback configuration, routing through the
    /// configured proxy when it is enabled.
    pub fn new(config: &CallbackConfig) -> Result<Self, ClientBuildError> {
        let timeout = config.timeout();
        let mut builder = Client::builder().timeout(timeout);

        if config.proxy.enabled {
            let mut proxy = Proxy::all(config.proxy.url())
                .map_err(|e| ClientBuildError::Proxy(e.to_string()))?;
            if config.proxy.auth_enabled {
                let username = config.proxy.username.as_deref().unwrap_or_default();
                let password = config
                    .proxy
                    .password
                    .as_ref()
                    .map(|p| p.expose_secret().as_str())
                    .unwrap_or_default();
                proxy = proxy.basic_auth(username, password);
            }
            if let Some(hosts) = &config.proxy.non_proxy_hosts {
                proxy = proxy.no_proxy(NoProxy::from_string(hosts));
            }
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> DeliveryError {
        if err.is_timeout() {
            DeliveryError::Timeout(self.timeout)
        } else if err.is_connect() {
            DeliveryError::Unreachable(format!("Connection failed: {}", err))
        } else if err.is_builder() {
            DeliveryError::InvalidAddress(err.to_string())
        } else {
            DeliveryError::Unreachable(err.to_string())
        }
    }
}

#[async_trait]
impl CallbackDelivery for HttpCallbackDelivery {
    async fn deliver(
        &self,
        session_id: &SessionId,
        report: &Report,
        address: &str,
    ) -> Result<(), DeliveryError> {
        let url = Url::parse(address)
            .map_err(|e| DeliveryError::InvalidAddress(format!("{}: {}", address, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeliveryError::InvalidAddress(format!(
                "{}: unsupported scheme",
                address
            )));
        }

        let payload = CallbackPayload {
            session_id: session_id.clone(),
            report: report.clone(),
        };

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(session_id = %session_id, status = status.as_u16(), "Report delivered");
        Ok(())
    }
}
