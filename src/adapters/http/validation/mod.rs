//! HTTP adapter for evidence validation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{IssuanceValidationRequest, VerifierValidationRequest};
pub use handlers::ValidationHandlers;
pub use routes::validation_routes;
