//! Suggestion HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SuggestionHandlers;
pub use routes::suggestion_routes;
