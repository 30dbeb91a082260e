//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AttributeResponse, AuthorizationResponse, CreateSessionRequest, CreateSessionResponse,
    SessionListResponse, SetAttributeRequest,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
