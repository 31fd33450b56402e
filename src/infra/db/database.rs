//! SQLite database setup and connection management for PaintCalc
//! Stores each record as a row in a single key/value table.

use crate::infra::store::KeyValueStore;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::{Connection, ErrorCode, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DB_FILENAME: &str = "paintcalc.sqlite";

const SCHEMA_VERSION: i32 = 1;

/// Database wrapper that manages the SQLite connection
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Like [`Database::open_at`], but a file that is not a readable SQLite
    /// database is moved to `<name>.corrupt` and replaced by an empty one.
    pub fn open_or_recover(path: PathBuf) -> Result<Self> {
        match Self::open_at(path.clone()) {
            Ok(db) => Ok(db),
            Err(err) if is_corrupt(&err) => {
                let aside = corrupt_path(&path);
                log::warn!(
                    "Database {} is unreadable ({:#}); moving it to {} and starting empty",
                    path.display(),
                    err,
                    aside.display()
                );
                std::fs::rename(&path, &aside)
                    .with_context(|| format!("Failed to move {} aside", path.display()))?;
                Self::open_at(path)
            }
            Err(err) => Err(err),
        }
    }

    /// Initialize database schema
    fn init(&self) -> Result<()> {
        let conn = self.conn.lock();

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        // Records carry no version of their own; any schema with a
        // `records` table is read as-is.
        Self::create_schema(&conn)?;
        if existing_version == 0 {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        } else if existing_version > SCHEMA_VERSION {
            log::debug!(
                "database schema version {} is newer than {}; using it as-is",
                existing_version,
                SCHEMA_VERSION
            );
        }

        Ok(())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

fn is_corrupt(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>()
            .and_then(rusqlite::Error::sqlite_error_code),
        Some(ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt)
    )
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

impl KeyValueStore for Database {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let value = conn
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO records (key, value) VALUES (?1, ?2)",
            (key, value),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_version(path: &Path) -> Result<i32> {
        let conn = Connection::open(path)?;
        Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
    }

    #[test]
    fn test_database_records_roundtrip() -> Result<()> {
        let db = Database::open_in_memory()?;
        assert_eq!(db.load("paints")?, None);

        db.save("paints", "[]")?;
        db.save("paints", "[{\"id\":\"p1\",\"name\":\"\",\"code\":\"\"}]")?;
        assert_eq!(
            db.load("paints")?.as_deref(),
            Some("[{\"id\":\"p1\",\"name\":\"\",\"code\":\"\"}]")
        );
        assert_eq!(db.load("rooms")?, None);
        Ok(())
    }

    #[test]
    fn test_database_reopen_keeps_records() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data").join(DB_FILENAME);

        {
            let db = Database::open_at(path.clone())?;
            db.save("rooms", "[]")?;
        }
        assert_eq!(user_version(&path)?, SCHEMA_VERSION);

        let db = Database::open_at(path)?;
        assert_eq!(db.load("rooms")?.as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn test_database_accepts_newer_schema_as_is() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DB_FILENAME);
        {
            let conn = Connection::open(&path)?;
            conn.execute_batch(
                "CREATE TABLE records (key TEXT PRIMARY KEY, value TEXT NOT NULL);
                 INSERT INTO records (key, value) VALUES ('rooms', '[]');
                 PRAGMA user_version = 99;",
            )?;
        }

        let db = Database::open_at(path.clone())?;
        assert_eq!(db.load("rooms")?.as_deref(), Some("[]"));
        db.save("paints", "[]")?;
        drop(db);
        assert_eq!(user_version(&path)?, 99);
        Ok(())
    }

    #[test]
    fn test_database_newer_schema_without_table_gets_one() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DB_FILENAME);
        {
            let conn = Connection::open(&path)?;
            conn.pragma_update(None, "user_version", 7)?;
        }

        let db = Database::open_at(path)?;
        assert_eq!(db.load("paints")?, None);
        db.save("paints", "[]")?;
        assert_eq!(db.load("paints")?.as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn test_open_or_recover_moves_garbage_aside() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DB_FILENAME);
        let garbage = "this file was written by hand and is not an sqlite database. ".repeat(4);
        std::fs::write(&path, &garbage)?;

        assert!(Database::open_at(path.clone()).is_err());

        let db = Database::open_or_recover(path.clone())?;
        assert_eq!(db.load("paints")?, None);
        db.save("paints", "[]")?;

        let aside = dir.path().join("paintcalc.sqlite.corrupt");
        assert_eq!(std::fs::read_to_string(aside)?, garbage);
        Ok(())
    }

    #[test]
    fn test_open_or_recover_keeps_healthy_database() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DB_FILENAME);
        Database::open_at(path.clone())?.save("rooms", "[]")?;

        let db = Database::open_or_recover(path)?;
        assert_eq!(db.load("rooms")?.as_deref(), Some("[]"));
        assert!(!dir.path().join("paintcalc.sqlite.corrupt").exists());
        Ok(())
    }
}
