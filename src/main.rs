//! verifier-testbed server binary.

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use verifier_testbed::adapters::callback::ClientBuildError;
use verifier_testbed::adapters::http::{router, AppState};
use verifier_testbed::adapters::{HttpCallbackDelivery, InMemorySessionRegistry};
use verifier_testbed::application::{IssuanceValidator, Notifier, VerifierValidator};
use verifier_testbed::config::{AppConfig, ConfigError, ValidationError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientBuildError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let registry = Arc::new(InMemorySessionRegistry::new());
    let delivery = Arc::new(HttpCallbackDelivery::new(&config.callback)?);
    let notifier = Arc::new(Notifier::new(registry.clone(), delivery));

    let state = AppState {
        registry,
        notifier,
        issuance: Arc::new(IssuanceValidator::new()),
        verifier: Arc::new(VerifierValidator::new()),
        authorization_scheme: config.authorization.scheme.clone(),
    };
    let app = router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        callback_timeout_secs = config.callback.timeout_secs,
        proxy = config.callback.proxy.enabled,
        "verifier-testbed listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
