//! SQLite backend for the stats record (rusqlite)
//!
//! The database keeps a `meta` table with the schema version and a single-row
//! `stats` table whose columns match the JSON field names.

use super::{StatsStorage, StorageError};
use crate::stats::Stats;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// File name used inside the data directory.
pub const DB_FILE_NAME: &str = "hangman.db";

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: meta and stats tables
const SCHEMA_VERSION: u32 = 1;

/// Stats stored in a SQLite database.
pub struct SqliteStorage {
    conn: Connection,
    location: String,
}

impl SqliteStorage {
    /// Open or create the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::with_connection(conn, path.display().to_string())
    }

    /// Open or create `hangman.db` inside `dir`.
    pub fn open_in_dir(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path: PathBuf = dir.as_ref().join(DB_FILE_NAME);
        Self::open(path)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, ":memory:".to_string())
    }

    fn with_connection(conn: Connection, location: String) -> Result<Self, StorageError> {
        let storage = SqliteStorage { conn, location };
        storage.initialize_schema()?;
        Ok(storage)
    }

    fn initialize_schema(&self) -> Result<(), StorageError> {
        let current_version = self.get_schema_version()?;

        if current_version == 0 {
            self.create_schema_v1()?;
        } else if current_version > SCHEMA_VERSION {
            // Database is from a newer version of hangman
            return Err(StorageError::FutureSchemaVersion {
                found: current_version,
                supported: SCHEMA_VERSION,
            });
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<u32, StorageError> {
        let table_exists: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='meta'",
            [],
            |row| row.get(0),
        )?;

        if !table_exists {
            return Ok(0);
        }

        let version: u32 = self
            .conn
            .query_row("SELECT schema_version FROM meta LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        Ok(version)
    }

    fn create_schema_v1(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            r#"
            -- Meta table: schema version
            CREATE TABLE IF NOT EXISTS meta (
                schema_version INTEGER NOT NULL
            );

            -- Stats table: at most one row, id is always 1
            CREATE TABLE IF NOT EXISTS stats (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                games_played INTEGER NOT NULL,
                games_won INTEGER NOT NULL,
                current_streak INTEGER NOT NULL,
                best_streak INTEGER NOT NULL
            );
            "#,
        )?;

        self.conn.execute(
            "INSERT INTO meta (schema_version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;

        Ok(())
    }
}

impl StatsStorage for SqliteStorage {
    fn read(&self) -> Result<Option<Stats>, StorageError> {
        let stats = self
            .conn
            .query_row(
                "SELECT games_played, games_won, current_streak, best_streak FROM stats WHERE id = 1",
                [],
                |row| {
                    Ok(Stats {
                        games_played: row.get(0)?,
                        games_won: row.get(1)?,
                        current_streak: row.get(2)?,
                        best_streak: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(stats)
    }

    fn save(&mut self, stats: &Stats) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO stats (id, games_played, games_won, current_streak, best_streak)
             VALUES (1, ?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                games_played = excluded.games_played,
                games_won = excluded.games_won,
                current_streak = excluded.current_streak,
                best_streak = excluded.best_streak",
            params![
                stats.games_played,
                stats.games_won,
                stats.current_streak,
                stats.best_streak
            ],
        )?;

        tracing::debug!("Saved stats to {}", self.location);

        Ok(())
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_is_absent() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.read().unwrap().is_none());
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_schema_version_is_current() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let version: u32 = storage
            .conn
            .query_row("SELECT schema_version FROM meta", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let stats = Stats {
            games_played: 3,
            games_won: 2,
            current_streak: 0,
            best_streak: 2,
        };

        storage.save(&stats).unwrap();
        assert_eq!(storage.load(), Some(stats));
    }

    #[test]
    fn test_save_keeps_single_row() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        let mut stats = Stats::default();

        for _ in 0..3 {
            stats.games_played += 1;
            storage.save(&stats).unwrap();
        }

        let rows: i64 = storage
            .conn
            .query_row("SELECT COUNT(*) FROM stats", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(storage.read().unwrap().unwrap().games_played, 3);
    }

    #[test]
    fn test_negative_counter_is_absent() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage
            .conn
            .execute(
                "INSERT INTO stats (id, games_played, games_won, current_streak, best_streak) VALUES (1, -4, 0, 0, 0)",
                [],
            )
            .unwrap();

        assert!(storage.read().is_err());
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_reopen_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let stats = Stats {
            games_played: 7,
            games_won: 4,
            current_streak: 2,
            best_streak: 3,
        };

        {
            let mut storage = SqliteStorage::open_in_dir(dir.path()).unwrap();
            storage.save(&stats).unwrap();
        }

        let storage = SqliteStorage::open_in_dir(dir.path()).unwrap();
        assert_eq!(storage.load(), Some(stats));
    }

    #[test]
    fn test_future_schema_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);

        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE meta (schema_version INTEGER NOT NULL);
                 INSERT INTO meta (schema_version) VALUES (99);",
            )
            .unwrap();
        }

        match SqliteStorage::open(&path) {
            Err(StorageError::FutureSchemaVersion { found, supported }) => {
                assert_eq!(found, 99);
                assert_eq!(supported, SCHEMA_VERSION);
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected future schema version error"),
        }
    }

    #[test]
    fn test_garbage_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);
        std::fs::write(&path, "this is not a sqlite database, just some text padding it out").unwrap();

        assert!(SqliteStorage::open(&path).is_err());
    }
}
