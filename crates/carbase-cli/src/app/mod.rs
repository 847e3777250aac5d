//! Application-level utilities for the carbase CLI.
//!
//! This module provides:
//! - Path resolution for config and data files
//! - A per-run context that loads config lazily and opens the store

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
