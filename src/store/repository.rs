//! PlaylistRepository trait and result types.

use crate::domain::{Platform, Playlist, Song};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No playlist with the given name exists.
    #[error("playlist not found: {name}")]
    PlaylistNotFound { name: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be turned back into a domain value.
    #[error("invalid data in store: {0}")]
    InvalidData(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Listing entry for a stored playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistSummary {
    name: String,
    platform: Platform,
    song_count: usize,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl PlaylistSummary {
    pub fn new(
        name: impl Into<String>,
        platform: Platform,
        song_count: usize,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            platform,
            song_count,
            created,
            modified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn song_count(&self) -> usize {
        self.song_count
    }

    /// When the playlist was first stored.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// When the playlist or its songs last changed.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

/// Persistent storage for playlists.
///
/// Playlists are keyed by name. Song order is preserved exactly as stored.
pub trait PlaylistRepository {
    /// Inserts a playlist, or replaces the platform and songs of an existing one.
    fn store_playlist(&mut self, playlist: &Playlist) -> StoreResult<()>;

    /// Retrieves a playlist with its songs in stored order.
    fn get_playlist(&self, name: &str) -> StoreResult<Option<Playlist>>;

    /// Lists all playlists sorted by name.
    fn list_playlists(&self) -> StoreResult<Vec<PlaylistSummary>>;

    /// Appends a song to the end of a playlist.
    ///
    /// Returns `PlaylistNotFound` if the playlist does not exist.
    fn add_song(&mut self, name: &str, song: &Song) -> StoreResult<()>;

    /// Removes every song whose title is exactly `title`.
    ///
    /// Returns how many songs were removed, or `PlaylistNotFound` if the
    /// playlist does not exist.
    fn remove_song(&mut self, name: &str, title: &str) -> StoreResult<usize>;

    /// Deletes a playlist and its songs. Returns false if it did not exist.
    fn delete_playlist(&mut self, name: &str) -> StoreResult<bool>;
}
