//! Notifier - delivers a report to one session or to every active session.
//!
//! Targets are resolved against a registry snapshot, then each delivery runs
//! on its own detached task. Per-target failures are collected into a
//! [`NotificationSummary`] and never fail the call. Dropping the `notify`
//! future stops the summary from being collected but never cancels a
//! delivery already issued.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::report::Report;
use crate::domain::session::{AttributeValue, CALLBACK_ADDRESS};
use crate::ports::{CallbackDelivery, DeliveryError, SessionRegistry};

/// Errors surfaced to the caller of [`Notifier::notify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

impl From<NotifyError> for DomainError {
    fn from(err: NotifyError) -> Self {
        match &err {
            NotifyError::SessionNotFound(id) => DomainError::new(ErrorCode::NotFound, err.to_string())
                .with_detail("session_id", id.to_string()),
        }
    }
}

/// One target whose delivery failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailureRecord {
    pub session_id: SessionId,
    pub address: Option<String>,
    pub error: DeliveryError,
}

/// What happened to each resolved target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSummary {
    /// Size of the resolved target set
    pub targets: usize,
    pub delivered: Vec<SessionId>,
    pub failed: Vec<DeliveryFailureRecord>,
    /// Broadcast targets destroyed between snapshot and lookup
    pub skipped: Vec<SessionId>,
}

impl NotificationSummary {
    /// Number of sessions the notification was addressed to.
    pub fn recipients(&self) -> usize {
        self.targets
    }

    /// Deliveries that reached the transport, successful or not.
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

enum TargetOutcome {
    Delivered(SessionId),
    Failed(DeliveryFailureRecord),
    Skipped(SessionId),
}

/// Resolves targets and fans a report out to their callback addresses.
#[derive(Clone)]
pub struct Notifier {
    registry: Arc<dyn SessionRegistry>,
    delivery: Arc<dyn CallbackDelivery>,
}

impl Notifier {
    pub fn new(registry: Arc<dyn SessionRegistry>, delivery: Arc<dyn CallbackDelivery>) -> Self {
        Self { registry, delivery }
    }

    /// Delivers `report` to `target`, or to every active session when
    /// `target` is `None`.
    ///
    /// `override_callback` replaces the registry lookup for every target.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::SessionNotFound`] only when an explicit target
    /// is unknown and no override address was supplied. Delivery failures
    /// are reported through the summary.
    pub async fn notify(
        &self,
        report: Report,
        target: Option<SessionId>,
        override_callback: Option<String>,
    ) -> Result<NotificationSummary, NotifyError> {
        let broadcast = target.is_none();
        let targets: Vec<SessionId> = match target {
            Some(id) => {
                if override_callback.is_none()
                    && self.registry.get_attribute(&id, CALLBACK_ADDRESS).await.is_none()
                {
                    return Err(NotifyError::SessionNotFound(id));
                }
                vec![id]
            }
            None => self.registry.list_active_session_ids().await.into_iter().collect(),
        };

        let report = Arc::new(report);
        let mut tasks: Vec<JoinHandle<TargetOutcome>> = Vec::with_capacity(targets.len());
        for session_id in targets.iter().cloned() {
            let registry = Arc::clone(&self.registry);
            let delivery = Arc::clone(&self.delivery);
            let report = Arc::clone(&report);
            let override_callback = override_callback.clone();
            tasks.push(tokio::spawn(async move {
                let address = match override_callback {
                    Some(address) => address,
                    None => match registry.get_attribute(&session_id, CALLBACK_ADDRESS).await {
                        Some(AttributeValue::Text(address)) => address,
                        Some(other) => {
                            return TargetOutcome::Failed(DeliveryFailureRecord {
                                session_id,
                                address: None,
                                error: DeliveryError::InvalidAddress(format!(
                                    "callback address is not text: {:?}",
                                    other
                                )),
                            })
                        }
                        None if broadcast => return TargetOutcome::Skipped(session_id),
                        None => {
                            return TargetOutcome::Failed(DeliveryFailureRecord {
                                session_id,
                                address: None,
                                error: DeliveryError::InvalidAddress(
                                    "session has no callback address".to_string(),
                                ),
                            })
                        }
                    },
                };

                match delivery.deliver(&session_id, &report, &address).await {
                    Ok(()) => TargetOutcome::Delivered(session_id),
                    Err(error) => TargetOutcome::Failed(DeliveryFailureRecord {
                        session_id,
                        address: Some(address),
                        error,
                    }),
                }
            }));
        }

        let mut summary = NotificationSummary {
            targets: targets.len(),
            ..Default::default()
        };
        for task in tasks {
            match task.await {
                Ok(TargetOutcome::Delivered(id)) => summary.delivered.push(id),
                Ok(TargetOutcome::Failed(record)) => {
                    tracing::warn!(
                        session_id = %record.session_id,
                        address = record.address.as_deref().unwrap_or("-"),
                        error = %record.error,
                        "Callback delivery failed"
                    );
                    summary.failed.push(record);
                }
                Ok(TargetOutcome::Skipped(id)) => {
                    tracing::warn!(session_id = %id, "Session vanished before delivery, skipping");
                    summary.skipped.push(id);
                }
                Err(e) => tracing::error!(error = %e, "Delivery task failed"),
            }
        }

        tracing::info!(
            targets = summary.targets,
            attempted = summary.attempted(),
            delivered = summary.delivered.len(),
            failed = summary.failed.len(),
            skipped = summary.skipped.len(),
            "Notification dispatched"
        );
        Ok(summary)
    }
}
