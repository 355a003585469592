// ABOUTME: String-keyed persistence store: the terminal stand-in for browser localStorage.
// ABOUTME: In-memory store for tests and a JSON file store with atomic tmp+rename writes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read store {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store {} is not a JSON object of strings: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A group of writes: `Some` sets the key, `None` removes it.
pub type Batch = Vec<(String, Option<String>)>;

/// Synchronous string-keyed store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Apply several writes. Stores that can commit them together override this.
    fn apply(&mut self, batch: Batch) -> Result<(), StorageError> {
        for (key, value) in batch {
            match value {
                Some(value) => self.set(&key, &value)?,
                None => self.remove(&key)?,
            }
        }
        Ok(())
    }
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// The whole map is held in memory; every mutation rewrites the file. A batch
/// is committed with one rewrite, so readers see all of it or none of it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the map to disk (atomic write via tmp + rename).
    fn flush(&self) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&tmp_path, &content).map_err(write_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }

    fn apply(&mut self, batch: Batch) -> Result<(), StorageError> {
        let mut changed = false;
        for (key, value) in batch {
            changed |= match value {
                Some(value) => self.entries.insert(key, value.clone()).as_ref() != Some(&value),
                None => self.entries.remove(&key).is_some(),
            };
        }
        if changed { self.flush() } else { Ok(()) }
    }
}
