//! Config document store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or rewriting the config document.
///
/// `Read`, `Parse`, and `NotAnObject` are read-side failures; `Serialize`
/// and `Write` are write-side failures that leave the file content from the
/// last successful write in place.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Config file is missing or unreadable.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file contents are not valid JSON.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Config file parses, but the top-level value is not a JSON object.
    #[error("config file {path} does not hold a JSON object")]
    NotAnObject {
        /// Path of the config file.
        path: PathBuf,
    },

    /// A field value could not be serialised to JSON.
    #[error("failed to serialise field `{field}`: {source}")]
    Serialize {
        /// Name of the field being set.
        field: String,
        /// Underlying serialisation error.
        source: serde_json::Error,
    },

    /// Updated document could not be written back to disk.
    #[error("failed to write config file {path}: {source}")]
    Write {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
