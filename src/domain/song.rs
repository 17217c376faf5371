//! A single track in a playlist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A song as stored in a playlist.
///
/// All fields keep their original casing. Only the prefix index
/// normalizes the title, and it does so on its own copy of the key.
///
/// An empty title is accepted and indexed under the empty key, so such a
/// song matches only the empty prefix.
///
/// # Examples
///
/// ```
/// use trackdex::domain::Song;
///
/// let song = Song::new("Beat It", "Michael Jackson", "https://example.com/beat-it");
/// assert_eq!(song.title(), "Beat It");
/// assert_eq!(song.to_string(), "Beat It - Michael Jackson");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(rename = "url", alias = "link", default)]
    link: String,
}

impl Song {
    /// Creates a new song.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            link: link.into(),
        }
    }

    /// Returns the song title as given.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the performing artist.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Returns the external link to the track.
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.artist.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} - {}", self.title, self.artist)
        }
    }
}
