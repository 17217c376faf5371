//! Search command handler.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use super::{load_playlist, open_store, plural};
use crate::cli::SearchArgs;
use crate::cli::output::{Output, OutputFormat, SearchListing};
use crate::domain::Song;
use crate::index::PrefixIndex;
use crate::store::PlaylistRepository;

pub fn handle_search(args: &SearchArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let index = build_playlist_index(&store, &args.playlist)?;
    let matches = index.search_prefix(&args.prefix);
    tracing::debug!(
        playlist = %args.playlist,
        prefix = %args.prefix,
        matches = matches.len(),
        "prefix search"
    );
    print!(
        "{}",
        render_search(&args.playlist, &args.prefix, &matches, args.format)?
    );
    Ok(())
}

/// Builds a fresh index from the stored songs of a playlist.
pub(crate) fn build_playlist_index(
    store: &impl PlaylistRepository,
    name: &str,
) -> Result<PrefixIndex> {
    let playlist = load_playlist(store, name)?;
    Ok(PrefixIndex::build_from_songs(playlist.into_songs()))
}

pub(crate) fn render_search(
    playlist: &str,
    prefix: &str,
    matches: &[&Song],
    format: OutputFormat,
) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            if matches.is_empty() {
                writeln!(out, "No songs in '{}' start with '{}'.", playlist, prefix)?;
            } else {
                for song in matches {
                    writeln!(out, "{}", song)?;
                    if !song.link().is_empty() {
                        writeln!(out, "  {}", song.link())?;
                    }
                }
                writeln!(out)?;
                writeln!(out, "{}", plural(matches.len(), "match", "matches"))?;
            }
        }
        OutputFormat::Json => {
            let listing = SearchListing {
                playlist,
                prefix,
                matches: matches.to_vec(),
                total_matches: matches.len(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listing))?)?;
        }
    }
    Ok(out)
}
