//! Client-local key/value storage for preference flags.
//!
//! Values are plain strings persisted as a flat JSON object. A missing or
//! unreadable file is treated as "nothing stored yet".

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ResultExt, StorageError};

const APP_DIR: &str = "codefolio";
const PREFS_FILE: &str = "preferences.json";

/// Minimal string key/value store.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Default preference file location: `<config dir>/codefolio/preferences.json`.
pub fn default_prefs_path() -> Result<PathBuf, StorageError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
        .ok_or(StorageError::NoConfigDirectory)
}

/// JSON-file backed store. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if it cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load(&path).absorb_or("load preferences", BTreeMap::new());
        tracing::debug!(path = %path.display(), entries = values.len(), "preferences opened");
        Self { path, values }
    }

    /// Read the file at `path`. A file that does not exist is empty.
    pub fn load(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StorageError::io("read", path, err)),
        };
        serde_json::from_str(&json).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::io("create", parent, err))?;
        }
        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            StorageError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|err| StorageError::io("write", &self.path, err))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// In-memory store for `--no-persist` runs and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path);
        store.set("welcomed", "true").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("welcomed").as_deref(), Some("true"));
    }

    #[test]
    fn test_malformed_file_reported_and_absorbed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileStore::load(&path),
            Err(StorageError::Malformed { .. })
        ));
        assert_eq!(FileStore::open(&path).get("theme"), None);
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = FileStore::open(&path);
        store.set("theme", "light").unwrap();
        store.remove("theme").unwrap();
        assert_eq!(FileStore::open(&path).get("theme"), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
    }
}
