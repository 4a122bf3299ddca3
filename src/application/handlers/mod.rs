//! Application command and query handlers, grouped by surface.

pub mod account;
pub mod chat;
pub mod compatibility;
pub mod consent;
pub mod couple;
pub mod feedback;
pub mod notification;
pub mod subscription;
pub mod suggestion;
pub mod thought;
pub mod wellbeing;

#[cfg(test)]
pub(crate) mod test_support;
