use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::pattern::Pattern;

/// Key prefix shared by every persisted pattern.
pub const PATTERN_KEY_PREFIX: &str = "pattern-";

// ============================================================================
// Errors
// ============================================================================

/// Error type for pattern persistence.
#[derive(Debug)]
pub enum StoreError {
    /// The backing store cannot be reached or written.
    Unavailable(String),
    /// A stored snapshot does not parse into a valid pattern.
    CorruptPattern { name: String, detail: String },
    /// No pattern stored under the requested name.
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(e) => write!(f, "pattern store unavailable: {}", e),
            StoreError::CorruptPattern { name, detail } => {
                write!(f, "saved pattern '{}' is corrupt: {}", name, detail)
            }
            StoreError::NotFound(name) => write!(f, "no saved pattern named '{}'", name),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

// ============================================================================
// Key-value store collaborators
// ============================================================================

/// Synchronous keyed string store — the persistence collaborator.  The
/// pattern layer only ever needs these four operations.
pub trait KvStore {
    fn list_keys(&self) -> Result<Vec<String>, StoreError>;
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key under the platform data directory.
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Store under the app's data directory (created if missing).
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(crate::logger::app_data_dir().join("patterns"))
    }

    pub fn open(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FsStore {
    fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                keys.push(stem.to_string());
            }
        }
        Ok(keys)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(fs::write(self.key_path(key), value)?)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and headless experiments.
#[derive(Default)]
pub struct MemStore {
    map: BTreeMap<String, String>,
}

impl KvStore for MemStore {
    fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.map.keys().cloned().collect())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.map.remove(key);
        Ok(())
    }
}

// ============================================================================
// Pattern library
// ============================================================================

/// Pattern-level operations over any key-value store: naming, snapshotting,
/// loading with validation, deletion.
pub struct PatternLibrary<S: KvStore> {
    store: S,
}

impl<S: KvStore> PatternLibrary<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All persisted pattern names, in store order.  Callers choose the
    /// display sort.
    pub fn saved_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .store
            .list_keys()?
            .into_iter()
            .filter(|k| k.starts_with(PATTERN_KEY_PREFIX))
            .collect())
    }

    /// Next free name: largest existing numeric suffix plus one,
    /// `pattern-0000` when the store holds none.
    pub fn next_name(&self) -> Result<String, StoreError> {
        let next = self
            .saved_names()?
            .iter()
            .filter_map(|n| name_suffix(n))
            .max()
            .map_or(0, |m| m + 1);
        Ok(format!("{}{:04}", PATTERN_KEY_PREFIX, next))
    }

    /// Assign the next free name, write the snapshot, and return the name.
    pub fn save(&mut self, pattern: &mut Pattern) -> Result<String, StoreError> {
        let name = self.next_name()?;
        pattern.name = Some(name.clone());
        let json = serde_json::to_string(pattern)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        self.store.set(&name, &json)?;
        Ok(name)
    }

    /// Load a snapshot by name.  A snapshot that fails to parse, or parses
    /// into an inconsistent pattern, is reported as corrupt and the caller's
    /// live pattern stays untouched.
    pub fn load(&self, name: &str) -> Result<Pattern, StoreError> {
        let Some(json) = self.store.get(name)? else {
            return Err(StoreError::NotFound(name.to_string()));
        };
        let pattern: Pattern =
            serde_json::from_str(&json).map_err(|e| StoreError::CorruptPattern {
                name: name.to_string(),
                detail: e.to_string(),
            })?;
        if !pattern.is_consistent() {
            return Err(StoreError::CorruptPattern {
                name: name.to_string(),
                detail: "grid dimensions do not match the cell data".to_string(),
            });
        }
        Ok(pattern)
    }

    /// Remove a snapshot.  Deleting a name that was never saved is a no-op.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        self.store.remove(name)
    }
}

/// Numeric suffix of a `pattern-NNNN` name, if it has one.
fn name_suffix(name: &str) -> Option<u32> {
    name.strip_prefix(PATTERN_KEY_PREFIX)?.parse().ok()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
