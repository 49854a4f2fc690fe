//! Durable cart storage backends.
//!
//! The cart persists as one JSON document under a fixed location, mirroring
//! a browser's single-key local storage. Backends move opaque strings; the
//! store layered on top owns serialization.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A place the serialized cart can be read from and written to.
pub trait CartStorage: Send + Sync {
    /// Read the stored payload. `None` means nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored payload.
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

/// File-backed storage. Writes go to a sibling temp file first and are
/// renamed into place, so a crash mid-write never truncates the cart.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let staged = self.path.with_extension("tmp");
        std::fs::write(&staged, payload)?;
        std::fs::rename(&staged, &self.path)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    payload: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        *self.payload.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join("rootwear-storage-tests")
            .join(format!("cart-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_file_storage_load_missing_is_none() {
        let storage = JsonFileStorage::new(scratch_path());
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = scratch_path();
        let storage = JsonFileStorage::new(path.clone());

        storage.save(r#"[{"id":"hoodie-1"}]"#).unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), r#"[{"id":"hoodie-1"}]"#);

        // Saves replace, not append.
        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "[]");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_file_storage_creates_parent_directories() {
        let path = std::env::temp_dir()
            .join("rootwear-storage-tests")
            .join(format!("nested-{}", uuid::Uuid::new_v4()))
            .join("deeper")
            .join("cart.json");
        let storage = JsonFileStorage::new(path.clone());

        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "[]");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save("[1,2]").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "[1,2]");
    }
}
