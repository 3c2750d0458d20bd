//! Secret store persistence.
//!
//! The store maps each target path to the ordered values masked in that
//! file. It is saved as pretty-printed JSON:
//!
//! ```json
//! {
//!     "docker-compose.yml": [
//!         "hunter2",
//!         "hunter2"
//!     ]
//! }
//! ```
//!
//! Position is the only thing tying a value to its slot in the file, so the
//! sequences are never sorted or deduplicated.
//!
//! Entries that are not a list of strings are set aside on load and written
//! back unchanged on save.

use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::types::{SecretValue, TargetPath};
use crate::error::{Result, StoreError};

/// Indentation used when writing the store file.
const INDENT: &[u8] = b"    ";

/// Target path to captured values, in mask order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretStore {
    files: BTreeMap<TargetPath, Vec<SecretValue>>,
    /// Entries of any other shape, kept verbatim.
    foreign: BTreeMap<String, Value>,
}

impl SecretStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. So does an unreadable file or
    /// one that is not a JSON object, after logging a warning. Within an
    /// object, each entry is checked on its own: malformed entries are
    /// warned about and carried through to the next save.
    pub fn load(path: &Path) -> Self {
        debug!(path = %path.display(), "loading secret store");

        if !path.exists() {
            debug!("secret store absent");
            return Self::new();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read secret store");
                return Self::new();
            }
        };

        let entries = match serde_json::from_str::<BTreeMap<String, Value>>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse secret store");
                return Self::new();
            }
        };

        let store = Self::from_entries(entries);
        debug!(files = store.len(), "secret store loaded");
        store
    }

    fn from_entries(entries: BTreeMap<String, Value>) -> Self {
        let mut store = Self::new();
        for (key, value) in entries {
            // The error text would echo the value, so it is not logged.
            match serde_json::from_value::<Vec<SecretValue>>(value.clone()) {
                Ok(values) => {
                    store.files.insert(key, values);
                }
                Err(_) => {
                    warn!(entry = %key, "ignoring malformed secret store entry");
                    store.foreign.insert(key, value);
                }
            }
        }
        store
    }

    /// Overwrite `path` with the full store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), files = self.len(), "saving secret store");

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        let mut entries = self.foreign.clone();
        for (path, values) in &self.files {
            entries.insert(path.clone(), Value::from(values.clone()));
        }
        entries.serialize(&mut ser).map_err(StoreError::Serialize)?;
        buf.push(b'\n');

        std::fs::write(path, buf).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Values stored for a target.
    pub fn get(&self, path: &str) -> Option<&[SecretValue]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Values stored for a target, as a queue to consume from the front.
    pub fn queue(&self, path: &str) -> Option<VecDeque<SecretValue>> {
        self.files.get(path).map(|values| values.iter().cloned().collect())
    }

    /// Replace a target's entry wholesale.
    pub fn insert(&mut self, path: impl Into<TargetPath>, values: Vec<SecretValue>) {
        let path = path.into();
        self.foreign.remove(&path);
        self.files.insert(path, values);
    }

    /// Number of targets with an entry.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
