//! Input and parsing helper functions for the CLI.
//!
//! - Terminal confirmation prompts (`input`)
//! - Token, format and search-criterion parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::confirm_save_before_exit;
pub use parsing::{criterion_from_args, first_token, parse_int, validate_output_format};
