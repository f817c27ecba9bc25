//! Snapshot persistence behind an injected store.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::counter::ZikrSnapshot;
use crate::error::StoreError;

/// Where counter snapshots live. Implementations decide the medium;
/// the engine only sees load/save.
pub trait ZikrStore {
    /// Load the last saved snapshot, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<ZikrSnapshot>, StoreError>;

    /// Persist a snapshot, replacing any previous one.
    fn save(&self, snapshot: &ZikrSnapshot) -> Result<(), StoreError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ZikrStore for JsonFileStore {
    fn load(&self) -> Result<Option<ZikrSnapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&text)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &ZikrSnapshot) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<ZikrSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ZikrStore for MemoryStore {
    fn load(&self) -> Result<Option<ZikrSnapshot>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &ZikrSnapshot) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}
