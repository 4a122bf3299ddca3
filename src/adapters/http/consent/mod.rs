//! Consent HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ConsentHandlers;
pub use routes::consent_routes;
