// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! String blobs stored by key.
//!
//! Everything the demo layer keeps locally (the wizard snapshot, the mock
//! collections, the auth token) is a JSON string under a fixed key. Writes
//! replace the whole value; there is no cross-key transaction.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::backend;
use crate::diesel_schema::kv_store;
use crate::error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key/value storage for string blobs.
pub trait Storage: Send + Sync {
    /// Reads the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        (**self).remove(key)
    }
}

/// Diesel Insertable struct for `kv_store` rows.
#[derive(Insertable)]
#[diesel(table_name = kv_store)]
struct NewEntry<'a> {
    key: &'a str,
    value: &'a str,
}

/// Storage backed by a single `SQLite` table.
pub struct SqliteStorage {
    conn: Mutex<SqliteConnection>,
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage").finish_non_exhaustive()
    }
}

impl SqliteStorage {
    /// Creates storage on a fresh in-memory database.
    ///
    /// Each call receives a unique database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:awards_memdb_{db_id}?mode=memory&cache=shared");
        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates storage on a database file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, SqliteConnection>, PersistenceError> {
        self.conn.lock().map_err(|_| PersistenceError::LockPoisoned)
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let mut conn: MutexGuard<'_, SqliteConnection> = self.connection()?;
        let value: Option<String> = kv_store::table
            .filter(kv_store::key.eq(key))
            .select(kv_store::value)
            .first::<String>(&mut *conn)
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut conn: MutexGuard<'_, SqliteConnection> = self.connection()?;
        diesel::replace_into(kv_store::table)
            .values(&NewEntry { key, value })
            .execute(&mut *conn)?;
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let mut conn: MutexGuard<'_, SqliteConnection> = self.connection()?;
        diesel::delete(kv_store::table.filter(kv_store::key.eq(key))).execute(&mut *conn)?;
        Ok(())
    }
}

/// Storage held in process memory. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, PersistenceError> {
        self.entries.lock().map_err(|_| PersistenceError::LockPoisoned)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
