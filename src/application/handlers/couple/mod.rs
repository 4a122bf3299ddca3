//! Couple command and query handlers.

mod accept_invite;
mod create_invite;
mod get_couple;
mod unlink_partner;
mod update_shared_preferences;

pub use accept_invite::{AcceptInviteCommand, AcceptInviteHandler};
pub use create_invite::{CreateInviteCommand, CreateInviteHandler};
pub use get_couple::{GetCoupleHandler, GetCoupleQuery};
pub use unlink_partner::{UnlinkPartnerCommand, UnlinkPartnerHandler};
pub use update_shared_preferences::{
    UpdateSharedPreferencesCommand, UpdateSharedPreferencesHandler,
};
