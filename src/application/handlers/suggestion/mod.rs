//! Suggestion generation handlers.

mod generate_suggestions;

pub use generate_suggestions::{GenerateSuggestionsCommand, GenerateSuggestionsHandler};
