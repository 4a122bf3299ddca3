//! Wellbeing HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::WellbeingHandlers;
pub use routes::wellbeing_routes;
