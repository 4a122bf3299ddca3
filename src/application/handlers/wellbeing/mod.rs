//! Wellbeing check-in handlers.

mod list_checkins;
mod record_checkin;

pub use list_checkins::{ListCheckinsHandler, ListCheckinsQuery};
pub use record_checkin::{RecordCheckinCommand, RecordCheckinHandler};
