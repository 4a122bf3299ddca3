//! Consent handlers.

mod list_consents;
mod record_consent;

pub use list_consents::{ListConsentsHandler, ListConsentsQuery};
pub use record_consent::{RecordConsentCommand, RecordConsentHandler};
