//! Notification HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::NotificationHandlers;
pub use routes::notification_routes;
