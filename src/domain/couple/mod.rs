//! Couple module - Partner linkage, invites, and thought bubbles.

mod link;
mod thought;

pub use link::{
    validate_invite_code, CoupleLink, PartnerInvite, SharedPreferences, INVITE_TTL_HOURS,
};
pub use thought::{ThoughtBubble, MAX_THOUGHT_LEN};
