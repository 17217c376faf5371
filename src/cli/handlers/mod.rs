//! Command handlers for the CLI.

mod playlists;
mod search;
mod songs;


use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::Playlist;
use crate::store::{PlaylistRepository, SqliteStore, StoreError};

pub use playlists::{handle_delete, handle_export, handle_import, handle_list, handle_show};
pub use search::handle_search;
pub use songs::{handle_add, handle_remove};

/// Opens the playlist store, creating it on first use.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open playlist store at {}", db_path.display()))
}

/// Fetches a playlist, turning absence into a `PlaylistNotFound` error.
pub(crate) fn load_playlist(store: &impl PlaylistRepository, name: &str) -> Result<Playlist> {
    let playlist = store
        .get_playlist(name)
        .with_context(|| format!("failed to load playlist: {}", name))?;
    playlist.ok_or_else(|| {
        StoreError::PlaylistNotFound {
            name: name.to_string(),
        }
        .into()
    })
}

/// Picks the singular or plural form of a noun for a count.
pub(crate) fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}
