//! UI primitives for the carbase CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges and text styles
//! - **Render**: tables, headers, receipts, hints
//! - **Format**: string utilities

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;

pub use render::{header, kv, print_error, receipt, table, warning, Column};
