//! Callback adapters - Delivery of reports to orchestrator endpoints.

mod http_delivery;

pub use http_delivery::{CallbackPayload, ClientBuildError, HttpCallbackDelivery};
