//! HTTP adapter for inbound messages that notify waiting sessions.

mod handlers;

pub use handlers::{notification_routes, InputQuery, NotificationHandlers, MESSAGE_RECEIVED_ITEM};
