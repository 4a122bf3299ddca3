//! Couple HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CoupleHandlers;
pub use routes::couple_routes;
