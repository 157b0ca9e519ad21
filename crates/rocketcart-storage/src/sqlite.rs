//! SQLite implementation of the Storage trait.
//!
//! This is the durable backend for cart snapshots. It uses rusqlite with
//! bundled SQLite; each key is a single row in `kv_entries`.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StorageError};
use crate::migration;
use crate::traits::Storage;

/// SQLite-based storage implementation.
///
/// Thread-safe via internal Mutex.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute an operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Poisoned(format!("mutex poisoned: {}", e)))?;
        f(&conn)
    }
}

impl Storage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM kv_entries WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, migration::now_millis()],
            )?;
            tracing::trace!(key, bytes = value.len(), "wrote storage entry");
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sqlite_read_write() {
        let storage = SqliteStorage::open_memory().unwrap();
        assert_eq!(storage.read("@RocketShoes:cart").unwrap(), None);

        storage.write("@RocketShoes:cart", "[]").unwrap();
        assert_eq!(
            storage.read("@RocketShoes:cart").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_sqlite_overwrite_and_remove() {
        let storage = SqliteStorage::open_memory().unwrap();
        storage.write("k", "first").unwrap();
        storage.write("k", "second").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("second"));

        storage.remove("k").unwrap();
        assert_eq!(storage.read("k").unwrap(), None);
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_sqlite_keys_are_independent() {
        let storage = SqliteStorage::open_memory().unwrap();
        storage.write("a", "1").unwrap();
        storage.write("b", "2").unwrap();
        assert_eq!(storage.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.read("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_sqlite_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.db");

        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.write("cart", r#"[{"id":1}]"#).unwrap();
        }

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(
            storage.read("cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }
}
