//! GET /input - hand a message to one session or to all of them.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::adapters::http::error::error_response;
use crate::application::Notifier;
use crate::domain::foundation::SessionId;
use crate::domain::report::{Report, TestResult};

/// Report item carrying the inbound message.
pub const MESSAGE_RECEIVED_ITEM: &str = "messageReceived";

#[derive(Debug, Clone, Deserialize)]
pub struct InputQuery {
    /// Target session; all active sessions when absent.
    pub session: Option<String>,
    #[serde(default)]
    pub message: String,
    /// Address used instead of each session's registered callback.
    pub callback: Option<String>,
}

#[derive(Clone)]
pub struct NotificationHandlers {
    notifier: Arc<Notifier>,
}

impl NotificationHandlers {
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self { notifier }
    }
}

pub async fn provide_input(
    State(handlers): State<NotificationHandlers>,
    Query(query): Query<InputQuery>,
) -> Response {
    let report = match Report::builder(TestResult::Success)
        .item(MESSAGE_RECEIVED_ITEM, query.message.as_str())
        .build()
    {
        Ok(report) => report,
        Err(e) => return error_response(e),
    };

    let target = query.session.map(SessionId::from);
    match handlers.notifier.notify(report, target, query.callback).await {
        Ok(summary) => format!(
            "Sent message [{}] to {} session(s)",
            query.message,
            summary.recipients()
        )
        .into_response(),
        Err(e) => error_response(e),
    }
}

pub fn notification_routes(handlers: NotificationHandlers) -> Router {
    Router::new()
        .route("/", get(provide_input))
        .with_state(handlers)
}
