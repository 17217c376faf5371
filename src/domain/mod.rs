//! Core types: Song, Playlist, Platform

mod platform;
mod playlist;
mod song;

pub use platform::{ParsePlatformError, Platform};
pub use playlist::{ParsePlaylistError, Playlist};
pub use song::Song;
