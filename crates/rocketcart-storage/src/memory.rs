//! In-memory implementation of the Storage trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{Result, StorageError};
use crate::traits::Storage;

/// In-memory storage implementation.
///
/// All data is lost when the storage is dropped. Thread-safe via RwLock.
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    /// Number of successful writes, for write-through assertions.
    writes: AtomicUsize,
    /// When set, every write fails with `WriteRejected`.
    reject_writes: AtomicBool,
}

impl MemoryStorage {
    /// Create a new empty in-memory storage.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            writes: AtomicUsize::new(0),
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Create a storage pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(key.into(), value.into());
        }
        storage
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected(key.to_string()));
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_basic() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart").unwrap(), None);

        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_memory_storage_overwrite() {
        let storage = MemoryStorage::with_entry("cart", "[1]");
        storage.write("cart", "[2]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_memory_storage_remove() {
        let storage = MemoryStorage::with_entry("cart", "[]");
        storage.remove("cart").unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_rejects_writes() {
        let storage = MemoryStorage::with_entry("cart", "[]");
        storage.set_reject_writes(true);

        let err = storage.write("cart", "[1]").unwrap_err();
        assert!(matches!(err, StorageError::WriteRejected(_)));
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.write_count(), 0);
    }
}
