#[cfg(test)]
use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// A client-local, string keyed store. Values are opaque strings; the
/// caller decides how to encode them.
pub trait LocalStorage {
    /// Return the value saved under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Save `value` under `key`, replacing whatever was there.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value storage kept in a single table of a SQLite file.
pub struct SqliteStorage {
    db: Connection,
}

impl SqliteStorage {
    /// Open the storage file, creating it (and its table) if it does
    /// not exist.
    pub fn open(path: &Path) -> Result<SqliteStorage> {
        let db = Connection::open(path)
            .with_context(|| format!("Failed to open store file {}.", path.display()))?;
        init_store(&db)?;
        Ok(SqliteStorage { db })
    }

    /// Storage living only as long as the value itself.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<SqliteStorage> {
        let db = Connection::open_in_memory().context("Failed to open in-memory store.")?;
        init_store(&db)?;
        Ok(SqliteStorage { db })
    }
}

/// Initialize the store database.
fn init_store(db: &Connection) -> Result<()> {
    db.execute(
        "CREATE TABLE if not exists kv (
                  key             TEXT PRIMARY KEY,
                  value           TEXT NOT NULL
                  )",
        [],
    )
    .context("Failed to create kv table.")?;
    Ok(())
}

impl LocalStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .db
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .with_context(|| format!("Failed to read '{}' from the store.", key))?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES(?1, ?2)",
                params![key, value],
            )
            .with_context(|| format!("Failed to write '{}' to the store.", key))?;
        Ok(())
    }
}

/// Storage kept in a map, gone when dropped.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

#[cfg(test)]
impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
