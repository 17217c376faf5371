//! Song-level command handlers: add, rm.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{open_store, plural};
use crate::cli::{AddArgs, RemoveArgs};
use crate::domain::Song;
use crate::store::PlaylistRepository;

pub fn handle_add(args: &AddArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    let song = Song::new(&args.title, &args.artist, &args.link);
    store
        .add_song(&args.playlist, &song)
        .with_context(|| format!("failed to add '{}' to {}", args.title, args.playlist))?;
    println!("Added '{}' to {}", args.title, args.playlist);
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    let removed = remove_titled(&mut store, &args.playlist, &args.title)?;
    println!(
        "Removed {} titled '{}' from {}",
        plural(removed, "song", "songs"),
        args.title,
        args.playlist
    );
    Ok(())
}

/// Removes songs by exact title, failing when nothing matched.
pub(crate) fn remove_titled(
    store: &mut impl PlaylistRepository,
    playlist: &str,
    title: &str,
) -> Result<usize> {
    let removed = store
        .remove_song(playlist, title)
        .with_context(|| format!("failed to remove '{}' from {}", title, playlist))?;
    if removed == 0 {
        bail!("song not found in playlist {}: {}", playlist, title);
    }
    Ok(removed)
}
