// Key-value "defaults" store used by the Memento and Facade examples.
// In-memory by default; optionally mirrored to a JSON file on synchronize().

use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default)]
pub struct DefaultsStore {
    values: BTreeMap<String, Value>,
    path: Option<PathBuf>,
}

impl DefaultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a file-backed store. A missing file starts out empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let map: Map<String, Value> = serde_json::from_str(&content)?;
            map.into_iter().collect()
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = values.len(), "opened defaults store");
        Ok(Self {
            values,
            path: Some(path),
        })
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        debug!(%key, "set default");
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes the store to its backing file. No-op for in-memory stores.
    pub fn synchronize(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), keys = self.values.len(), "synchronized defaults store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() {
        let mut store = DefaultsStore::new();
        store.set("Bishop", "Disconnect me");
        assert_eq!(store.string("Bishop"), Some("Disconnect me"));
        assert!(store.contains("Bishop"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_and_remove() {
        let mut store = DefaultsStore::new();
        store.set("key", 1);
        store.set("key", 2);
        assert_eq!(store.get("key"), Some(&json!(2)));
        assert_eq!(store.remove("key"), Some(json!(2)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_typed_accessors_mismatch() {
        let mut store = DefaultsStore::new();
        store.set("number", 42);
        assert_eq!(store.string("number"), None);
        assert_eq!(store.object("number"), None);
        assert_eq!(store.string("missing"), None);
    }

    #[test]
    fn test_in_memory_synchronize_is_noop() {
        let store = DefaultsStore::new();
        assert!(store.synchronize().is_ok());
    }

    #[test]
    fn test_file_persistence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.json");

        let mut store = DefaultsStore::open(&path).unwrap();
        assert!(store.is_empty());
        store.set("state", json!({ "chapter": "Black Mesa Inbound" }));
        store.synchronize().unwrap();

        let reopened = DefaultsStore::open(&path).unwrap();
        let state = reopened.object("state").unwrap();
        assert_eq!(state["chapter"], "Black Mesa Inbound");
    }

    #[test]
    fn test_open_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            DefaultsStore::open(&path),
            Err(crate::PatternError::Json(_))
        ));
    }
}
