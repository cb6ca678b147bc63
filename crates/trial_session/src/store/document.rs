//! In-memory view of the session config document.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::error::StoreError;

/// The session config file, parsed into an in-memory key-value mapping.
///
/// Load the whole document, set the fields to change, and save it back.
/// Fields not touched between `load` and `save` round-trip unchanged.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use trial_session::store::ConfigDocument;
///
/// let path = Path::new("config.json");
/// let mut doc = ConfigDocument::load(path)?;
/// doc.set("trialArray", &vec![1u8, 1, 1, 0, 1])?;
/// doc.save(path)?;
/// # Ok::<(), trial_session::store::StoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    /// Top-level object of the config file.
    fields: Map<String, Value>,
}

impl ConfigDocument {
    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file is missing or unreadable,
    /// [`StoreError::Parse`] if it is not valid JSON, and
    /// [`StoreError::NotAnObject`] if the top-level value is not an object.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(StoreError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Serialises `value` and inserts it under `field`, replacing any prior
    /// value. All other fields are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if `value` cannot be represented as
    /// JSON.
    pub fn set<T: Serialize + ?Sized>(&mut self, field: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Serialize {
            field: field.to_string(),
            source,
        })?;
        self.fields.insert(field.to_string(), value);
        Ok(())
    }

    /// Returns the current value of `field`, if present.
    #[inline]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Serialises the full document and rewrites the file at `path`,
    /// truncating any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] on serialisation or I/O failure; the
    /// file keeps the content from the last successful write.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = fs::File::create(path).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::to_writer(file, &self.fields).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        Ok(())
    }
}

/// Reads the config document at `path`, sets `field` to `value`, and
/// rewrites the file — one full read-modify-write cycle.
///
/// # Errors
///
/// Propagates any [`StoreError`] from the load, set, or save step.
pub fn persist_field<T: Serialize + ?Sized>(
    path: &Path,
    field: &str,
    value: &T,
) -> Result<(), StoreError> {
    let mut doc = ConfigDocument::load(path)?;
    doc.set(field, value)?;
    doc.save(path)?;
    debug!(field, path = %path.display(), "config field rewritten");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_set_and_get() {
        let mut doc = ConfigDocument { fields: Map::new() };

        doc.set("trialArray", &vec![1u8, 1, 1]).unwrap();
        assert_eq!(doc.get("trialArray"), Some(&serde_json::json!([1, 1, 1])));
        assert_eq!(doc.get("absent"), None);
    }

    #[test]
    fn test_unserialisable_value_is_serialize_error() {
        let mut doc = ConfigDocument { fields: Map::new() };

        // JSON object keys must be strings; a sequence-keyed map cannot be
        // represented.
        let mut bad: HashMap<Vec<u8>, u32> = HashMap::new();
        bad.insert(vec![1, 2], 3);

        let err = doc.set("bad", &bad).unwrap_err();
        assert!(matches!(err, StoreError::Serialize { .. }));
    }
}
