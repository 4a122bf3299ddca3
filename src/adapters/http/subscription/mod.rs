//! Subscription HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SubscriptionHandlers;
pub use routes::{billing_routes, subscription_routes};
