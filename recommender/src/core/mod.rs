//! Core recommendation logic
//!
//! Prompt rendering and response parsing. Pure functions, no I/O.

pub mod parser;
pub mod prompt;

pub use parser::parse_recommendations;
pub use prompt::PromptBuilder;
