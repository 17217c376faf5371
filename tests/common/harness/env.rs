//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::TrackdexCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use trackdex::domain::Playlist;
use trackdex::store::{PlaylistRepository, SqliteStore};

/// Isolated test environment with its own database and config file.
///
/// Everything lives in a temp directory removed on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the SQLite database used by `cmd()`.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("playlists.db")
    }

    /// Path of the config file used by `cmd()` (absent unless written).
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Stores a playlist directly through the library.
    pub fn store(&self, playlist: &Playlist) {
        let mut store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        store
            .store_playlist(playlist)
            .expect("Failed to store playlist");
    }

    /// Opens the environment's database for inspection.
    pub fn open_store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open store")
    }

    /// Writes a file into the environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Command bound to this environment's database and config.
    pub fn cmd(&self) -> TrackdexCommand {
        TrackdexCommand::new()
            .config(&self.config_path())
            .db(&self.db_path())
    }

    /// Command bound to this environment's config only, no `--db`.
    pub fn cmd_without_db(&self) -> TrackdexCommand {
        TrackdexCommand::new().config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
