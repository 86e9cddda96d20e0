//! Durable key → string storage.
//!
//! Everything the app persists (translation cache entries, chat history,
//! the user profile) goes through [`KeyValueStore`]. Values are plain
//! strings; structured records are stored as JSON.

use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// A simple synchronized key → string store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write several entries at once. Backends that persist on every write
    /// override this to persist once per batch.
    fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// All keys starting with `prefix`, sorted.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// Non-durable store, for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().expect("store lock poisoned").remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect()
    }
}

/// Store persisted as a single JSON object file.
///
/// The file is read once at [`FileStore::open`] and rewritten after every
/// mutation (written to a sibling temp file, then renamed over the original).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        debug!("Opened store {} with {} keys", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Write the whole map. Called with the lock held so concurrent
    /// mutations cannot interleave their file writes.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn set_many(&self, batch: &[(String, String)]) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut entries = self.entries.lock().expect("store lock poisoned");
        for (key, value) in batch {
            entries.insert(key.clone(), value.clone());
        }
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStore Tests ====================

    #[test]
    fn test_memory_store_set_get() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a"), Some("1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a"), Some("2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clone_shares_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone.set("shared", "yes").unwrap();
        assert_eq!(store.get("shared"), Some("yes".to_string()));
    }

    #[test]
    fn test_keys_with_prefix_sorted() {
        let store = MemoryStore::new();
        store.set("tx:fa:b", "x").unwrap();
        store.set("tx:fa:a", "x").unwrap();
        store.set("tx:es:a", "x").unwrap();
        store.set("chat_history", "[]").unwrap();

        assert_eq!(store.keys_with_prefix("tx:fa:"), vec!["tx:fa:a", "tx:fa:b"]);
        assert_eq!(store.keys_with_prefix("tx:").len(), 3);
    }

    // ==================== FileStore Tests ====================

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.get("anything").is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let (store, _temp_dir) = create_test_store();
        store.set("tx:fa:Agree", "موافقم").unwrap();
        store.set("user_profile", "{}").unwrap();

        let reopened = FileStore::open(store.path()).unwrap();
        assert_eq!(reopened.get("tx:fa:Agree"), Some("موافقم".to_string()));
        assert_eq!(reopened.get("user_profile"), Some("{}".to_string()));
    }

    #[test]
    fn test_file_store_set_many_persists_all() {
        let (store, _temp_dir) = create_test_store();
        store
            .set_many(&[
                ("tx:es:Agree".to_string(), "De acuerdo".to_string()),
                ("tx:es:Next".to_string(), "Siguiente".to_string()),
            ])
            .unwrap();

        let reopened = FileStore::open(store.path()).unwrap();
        assert_eq!(reopened.get("tx:es:Agree"), Some("De acuerdo".to_string()));
        assert_eq!(reopened.get("tx:es:Next"), Some("Siguiente".to_string()));
    }

    #[test]
    fn test_file_store_empty_batch_writes_nothing() {
        let (store, _temp_dir) = create_test_store();
        store.set_many(&[]).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_remove_persists() {
        let (store, _temp_dir) = create_test_store();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(store.path()).unwrap();
        assert!(reopened.get("a").is_none());
        assert_eq!(reopened.get("b"), Some("2".to_string()));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("store.json");
        let store = FileStore::open(&path).unwrap();

        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_file_store_empty_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys_with_prefix("").is_empty());
    }

    #[test]
    fn test_file_store_no_temp_file_left_behind() {
        let (store, temp_dir) = create_test_store();
        store.set("k", "v").unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("store.json")]);
    }
}
