//! Suggestion module - AI-generated content types, prompts, and parsing.

mod category;
mod parser;
mod prompt;
#[allow(clippy::module_inception)]
mod suggestion;

pub use category::ActivityCategory;
pub use parser::{fallback_suggestions, parse_or_fallback, parse_suggestions};
pub use prompt::{companion_system_prompt, suggestion_prompt, system_prompt};
pub use suggestion::{Intensity, Suggestion, SuggestionBatch};
