//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the playlist database.
pub const DB_ENV: &str = "TRACKDEX_DB";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TRACKDEX_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default playlist database
    pub db: Option<PathBuf>,

    /// Default log filter, e.g. `info` or `trackdex=debug`
    pub log: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$TRACKDEX_CONFIG` if set, otherwise `~/.config/trackdex/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trackdex")
            .join("config.toml")
    }

    /// Resolve the database path.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. `$TRACKDEX_DB`
    /// 3. Config file `db` setting
    /// 4. `<data dir>/trackdex/playlists.db`
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        self.resolve_db_path(cli_db, std::env::var_os(DB_ENV).map(PathBuf::from))
    }

    fn resolve_db_path(&self, cli_db: Option<&PathBuf>, env_db: Option<PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or(env_db)
            .or_else(|| self.db.clone())
            .unwrap_or_else(default_db_path)
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trackdex")
        .join("playlists.db")
}
