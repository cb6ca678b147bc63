//! # Config Document Store
//!
//! Read-modify-write persistence against the shared session config file.
//! The file is a single JSON object owned by the wider acquisition setup;
//! this module reads the whole document, replaces one field, and rewrites
//! the file in place, leaving every other key untouched.
//!
//! There is no locking and no atomic rename: the store assumes one
//! sequential writer. A process interrupted between rewrites leaves the
//! document with whatever fields were written so far.

mod document;
mod error;

// Public re-exports
pub use document::{persist_field, ConfigDocument};
pub use error::StoreError;
