//! Persistent storage for lifetime statistics
//!
//! This module provides:
//! - OS-standard data directory location (via `directories` crate)
//! - The [`StatsStorage`] interface the driver loads from and saves to
//! - A JSON file backend and a SQLite backend
//!
//! Loading never fails: missing, unreadable or corrupt data is reported as
//! absent and the game starts from zeroed counters.

pub mod json;
pub mod sqlite;

pub use json::JsonFileStorage;
pub use sqlite::SqliteStorage;

use crate::config::{Config, StatsBackend};
use crate::stats::Stats;
use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("could not determine data directory")]
    NoDataDirectory,

    #[error("database schema version {found} is newer than supported version {supported}")]
    FutureSchemaVersion { found: u32, supported: u32 },
}

/// Load/save interface for the stats record.
pub trait StatsStorage {
    /// Read the stored record. `Ok(None)` means nothing has been saved yet.
    fn read(&self) -> Result<Option<Stats>, StorageError>;

    /// Persist the record, replacing whatever was stored.
    fn save(&mut self, stats: &Stats) -> Result<(), StorageError>;

    /// Human-readable location, for logs and messages.
    fn location(&self) -> String;

    /// Load the stored record, treating every failure as absent.
    fn load(&self) -> Option<Stats> {
        match self.read() {
            Ok(Some(stats)) if stats.is_consistent() => {
                tracing::info!(location = %self.location(), ?stats, "stats loaded");
                Some(stats)
            }
            Ok(Some(stats)) => {
                tracing::warn!(
                    location = %self.location(),
                    ?stats,
                    "stored stats are inconsistent, starting from zero"
                );
                None
            }
            Ok(None) => {
                tracing::info!(location = %self.location(), "no stored stats");
                None
            }
            Err(e) => {
                tracing::warn!(
                    location = %self.location(),
                    error = %e,
                    "could not load stats, starting from zero"
                );
                None
            }
        }
    }
}

/// Get the OS-standard data directory for hangman.
///
/// - Linux: `$XDG_DATA_HOME/hangman/` or `~/.local/share/hangman/`
/// - macOS: `~/Library/Application Support/hangman/`
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("", "", "hangman")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDirectory)
}

/// Open the configured backend.
///
/// A SQLite database that cannot be opened falls back to the JSON file in
/// the same directory.
pub fn open(config: &Config, data_dir: PathBuf) -> Box<dyn StatsStorage> {
    match config.stats_backend {
        StatsBackend::Json => Box::new(JsonFileStorage::in_dir(data_dir)),
        StatsBackend::Sqlite => match SqliteStorage::open_in_dir(&data_dir) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "could not open stats database, using JSON file");
                Box::new(JsonFileStorage::in_dir(data_dir))
            }
        },
    }
}
