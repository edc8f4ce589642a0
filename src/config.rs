//! Runtime configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Which backend stores lifetime statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatsBackend {
    /// `game_stats.json` in the data directory
    #[default]
    Json,
    /// `hangman.db` in the data directory
    Sqlite,
}

impl FromStr for StatsBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StatsBackend::Json),
            "sqlite" | "sqlite3" | "db" => Ok(StatsBackend::Sqlite),
            other => Err(format!("unknown stats backend {:?}", other)),
        }
    }
}

/// Settings for a hangman run.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Overrides the OS-standard data directory when set.
    pub data_dir: Option<PathBuf>,
    pub stats_backend: StatsBackend,
    /// Problems found while reading the environment, logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Config {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HANGMAN_DATA_DIR` - directory for stats and logs
    /// - `HANGMAN_STATS_BACKEND` - `json` (default) or `sqlite`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// Unparseable values keep their defaults and are noted in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("HANGMAN_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(backend) = lookup("HANGMAN_STATS_BACKEND") {
            match backend.parse() {
                Ok(backend) => config.stats_backend = backend,
                Err(e) => config
                    .warnings
                    .push(format!("ignoring HANGMAN_STATS_BACKEND: {}", e)),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.stats_backend, StatsBackend::Json);
    }

    #[test]
    fn test_data_dir_override() {
        let config = config_from(&[("HANGMAN_DATA_DIR", "/tmp/hangman-test")]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/hangman-test")));
    }

    #[test]
    fn test_blank_data_dir_ignored() {
        let config = config_from(&[("HANGMAN_DATA_DIR", "  ")]);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("json".parse::<StatsBackend>(), Ok(StatsBackend::Json));
        assert_eq!("SQLite".parse::<StatsBackend>(), Ok(StatsBackend::Sqlite));
        assert_eq!(" db ".parse::<StatsBackend>(), Ok(StatsBackend::Sqlite));
        assert!("yaml".parse::<StatsBackend>().is_err());
    }

    #[test]
    fn test_invalid_backend_keeps_default() {
        let config = config_from(&[("HANGMAN_STATS_BACKEND", "yaml")]);
        assert_eq!(config.stats_backend, StatsBackend::Json);
        assert_eq!(config.warnings.len(), 1);

        let config = config_from(&[("HANGMAN_STATS_BACKEND", "sqlite")]);
        assert_eq!(config.stats_backend, StatsBackend::Sqlite);
        assert!(config.warnings.is_empty());
    }
}
