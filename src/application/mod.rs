//! Application layer - Use-case handlers orchestrating ports.

pub mod handlers;
