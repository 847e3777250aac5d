//! # carbase core
//!
//! Core library for carbase - a small vehicle register kept in a plain-text
//! file.
//!
//! This crate provides the record model, the in-memory store and its search
//! engine, independent of the CLI.
//!
//! ## Architecture
//!
//! - **record**: `VehicleRecord` and field selectors
//! - **store**: ordered record store with load/save
//! - **codec**: data-file text format
//! - **query**: single-field exact/substring/range search
//! - **fs**: atomic file replacement

pub mod codec;
pub mod error;
pub mod fs;
pub mod query;
pub mod record;
pub mod store;

pub use error::{CarbaseError, Result};
pub use query::{search, Criterion, Hit, MatchMode};
pub use record::{Field, FieldKind, VehicleRecord, MAX_FIELD_LEN};
pub use store::{LoadReport, RecordStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
