//! Named, ordered collection of songs.

use super::{Platform, Song};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playlist document.
///
/// Playlists are identified by name. The song list is ordered and may
/// contain several songs with the same title.
///
/// The JSON shape matches what `import` reads and `export` writes:
///
/// ```json
/// { "name": "road trip", "platform": "spotify",
///   "songs": [{ "title": "Beat It", "artist": "Michael Jackson", "url": "..." }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlaylist")]
pub struct Playlist {
    name: String,
    platform: Platform,
    #[serde(default)]
    songs: Vec<Song>,
}

/// Error returned when a playlist name is unusable.
#[derive(Debug, Clone)]
pub struct ParsePlaylistError(String);

impl fmt::Display for ParsePlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParsePlaylistError {}

#[derive(Deserialize)]
struct RawPlaylist {
    name: String,
    platform: Platform,
    #[serde(default)]
    songs: Vec<Song>,
}

impl TryFrom<RawPlaylist> for Playlist {
    type Error = ParsePlaylistError;

    fn try_from(raw: RawPlaylist) -> Result<Self, Self::Error> {
        Ok(Playlist::new(&raw.name, raw.platform)?.with_songs(raw.songs))
    }
}

impl Playlist {
    /// Creates an empty playlist.
    ///
    /// The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ParsePlaylistError` if the name is empty or whitespace-only.
    pub fn new(name: &str, platform: Platform) -> Result<Self, ParsePlaylistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParsePlaylistError(
                "playlist name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            platform,
            songs: Vec::new(),
        })
    }

    /// Replaces the song list.
    pub fn with_songs(mut self, songs: Vec<Song>) -> Self {
        self.songs = songs;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Consumes the playlist, returning its songs in order.
    pub fn into_songs(self) -> Vec<Song> {
        self.songs
    }
}
