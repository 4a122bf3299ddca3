//! Push adapters - Notification delivery implementations.

mod http_relay;
mod log_sender;

pub use http_relay::HttpRelaySender;
pub use log_sender::LogSender;
