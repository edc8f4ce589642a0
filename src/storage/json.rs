#![allow(dead_code)]
//! JSON file backend for the stats record.

use super::{StatsStorage, StorageError};
use crate::stats::Stats;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used inside the data directory.
pub const STATS_FILE_NAME: &str = "game_stats.json";

/// Stores the stats record as a pretty-printed JSON object.
///
/// Writes go to a temporary file that is renamed over the old one, so a
/// crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Use an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `game_stats.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STATS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<Stats>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let stats: Stats = serde_json::from_str(&contents)?;

        tracing::debug!("Read stats from {}", self.path.display());

        Ok(Some(stats))
    }

    fn save(&mut self, stats: &Stats) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(stats)?;

        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })?;

        tracing::debug!("Saved stats to {}", self.path.display());

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
