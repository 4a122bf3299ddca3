//! Thought bubble handlers.

mod list_thoughts;
mod mark_thought_read;
mod send_thought;

pub use list_thoughts::{ListThoughtsHandler, ListThoughtsQuery};
pub use mark_thought_read::{MarkThoughtReadCommand, MarkThoughtReadHandler};
pub use send_thought::{SendThoughtCommand, SendThoughtHandler};
