//! String-keyed persistent store (lightweight SQLite wrapper for CLI usage).
//!
//! The whole persistence surface of the app is two keys holding one JSON
//! blob each; see `store::drives` and `store::prefs` for the adapters.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Key under which the serialized drive collection lives.
pub const DRIVES_KEY: &str = "drives";
/// Key under which the serialized preferences record lives.
pub const PREFERENCES_KEY: &str = "preferences";

pub struct KvStore {
    pub conn: Connection,
}

impl KvStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Fetch the value stored under `key`. A missing key is a normal
    /// "nothing stored yet" state, not an error.
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Overwrite the value stored under `key` unconditionally.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}
