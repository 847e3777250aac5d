//! Output formatting helpers for the CLI.
//!
//! Records are shown as tables, plain lines, JSON, or the detailed
//! "Car number:" blocks the interactive menu prints.

mod json;
mod text;

// Re-export public API
pub use json::{numbered, to_json};
pub use text::{print_record_list, record_block};
