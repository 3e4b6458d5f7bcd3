//! Scoped key/value item storage

use crate::storage::db::DatabaseError;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::fmt;

/// Lifetime class of a stored item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Survives across sessions
    Local,
    /// Dropped when the session is cleared
    Session,
}

impl Scope {
    /// Column value for this scope
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Session => "session",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent string key/value store with two scopes
pub trait KeyValueStore {
    /// Read an item
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read
    fn get(&self, scope: Scope, key: &str) -> Result<Option<String>, DatabaseError>;

    /// Write an item, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written
    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), DatabaseError>;

    /// Remove an item, returning whether it existed
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written
    fn remove(&mut self, scope: Scope, key: &str) -> Result<bool, DatabaseError>;

    /// Remove every item in a scope, returning how many were dropped
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written
    fn clear(&mut self, scope: Scope) -> Result<usize, DatabaseError>;
}

/// `SQLite`-backed item store
pub struct ItemStore<'a> {
    conn: &'a Connection,
}

impl<'a> ItemStore<'a> {
    /// Create a new item store
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for ItemStore<'_> {
    fn get(&self, scope: Scope, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT value FROM items WHERE scope = ?1 AND key = ?2
            ",
        )?;

        let result = stmt.query_row(params![scope.as_str(), key], |row| row.get(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), DatabaseError> {
        log::debug!("Writing {scope} item '{key}' ({} bytes)", value.len());
        self.conn.execute(
            r"
            INSERT INTO items (scope, key, value, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(scope, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
            params![scope.as_str(), key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, scope: Scope, key: &str) -> Result<bool, DatabaseError> {
        let deleted = self.conn.execute(
            r"
            DELETE FROM items WHERE scope = ?1 AND key = ?2
            ",
            params![scope.as_str(), key],
        )?;
        Ok(deleted > 0)
    }

    fn clear(&mut self, scope: Scope) -> Result<usize, DatabaseError> {
        let deleted = self.conn.execute(
            r"
            DELETE FROM items WHERE scope = ?1
            ",
            params![scope.as_str()],
        )?;
        Ok(deleted)
    }
}
