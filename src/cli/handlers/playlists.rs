//! Playlist-level command handlers: import, ls, show, export, delete.

use anyhow::{Context, Result, bail};
use std::fmt::Write as _;
use std::path::Path;

use super::{load_playlist, open_store, plural};
use crate::cli::output::{Output, OutputFormat, PlaylistListing};
use crate::cli::{DeleteArgs, ExportArgs, ImportArgs, ListArgs, ShowArgs};
use crate::domain::Playlist;
use crate::store::{PlaylistRepository, PlaylistSummary};

pub fn handle_import(args: &ImportArgs, db_path: &Path) -> Result<()> {
    let playlist = read_playlist_file(&args.file)?;
    let mut store = open_store(db_path)?;
    store
        .store_playlist(&playlist)
        .with_context(|| format!("failed to store playlist: {}", playlist.name()))?;

    println!(
        "Stored playlist '{}' ({}, {})",
        playlist.name(),
        playlist.platform(),
        plural(playlist.songs().len(), "song", "songs")
    );
    Ok(())
}

/// Reads a playlist document from a JSON file.
pub(crate) fn read_playlist_file(path: &Path) -> Result<Playlist> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid playlist document: {}", path.display()))
}

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let playlists = store
        .list_playlists()
        .context("failed to list playlists")?;
    print!("{}", render_list(&playlists, args.format)?);
    Ok(())
}

pub(crate) fn render_list(playlists: &[PlaylistSummary], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            if playlists.is_empty() {
                writeln!(out, "No playlists stored.")?;
            } else {
                for p in playlists {
                    writeln!(
                        out,
                        "{}  ({}, {})",
                        p.name(),
                        p.platform(),
                        plural(p.song_count(), "song", "songs")
                    )?;
                }
                writeln!(out)?;
                writeln!(out, "{}", plural(playlists.len(), "playlist", "playlists"))?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<PlaylistListing> = playlists
                .iter()
                .map(|p| PlaylistListing {
                    name: p.name().to_string(),
                    platform: p.platform().to_string(),
                    song_count: p.song_count(),
                    created: p.created().to_rfc3339(),
                    modified: p.modified().to_rfc3339(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listings))?)?;
        }
    }
    Ok(out)
}

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let playlist = load_playlist(&store, &args.playlist)?;
    print!("{}", render_show(&playlist, args.format)?);
    Ok(())
}

pub(crate) fn render_show(playlist: &Playlist, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            writeln!(out, "{} ({})", playlist.name(), playlist.platform())?;
            for (i, song) in playlist.songs().iter().enumerate() {
                writeln!(out, "{:>4}. {}", i + 1, song)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", plural(playlist.songs().len(), "song", "songs"))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(playlist))?)?;
        }
    }
    Ok(out)
}

pub fn handle_export(args: &ExportArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let playlist = load_playlist(&store, &args.playlist)?;
    let json = serde_json::to_string_pretty(&playlist)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported '{}' to {}", playlist.name(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn handle_delete(args: &DeleteArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    let deleted = store
        .delete_playlist(&args.playlist)
        .with_context(|| format!("failed to delete playlist: {}", args.playlist))?;
    if !deleted {
        bail!("playlist not found: {}", args.playlist);
    }
    println!("Deleted playlist '{}'", args.playlist);
    Ok(())
}
