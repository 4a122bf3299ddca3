//! Notification preference handlers.

mod get_preferences;
mod register_device;
mod update_preferences;

pub use get_preferences::{GetPreferencesHandler, GetPreferencesQuery};
pub use register_device::{RegisterDeviceCommand, RegisterDeviceHandler};
pub use update_preferences::{UpdatePreferencesCommand, UpdatePreferencesHandler};
