//! User module - Profile aggregate.

mod profile;

pub use profile::{UserProfile, TRIAL_DAYS};
