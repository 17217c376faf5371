//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Song;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A playlist in listing output.
#[derive(Debug, Serialize)]
pub struct PlaylistListing {
    pub name: String,
    pub platform: String,
    pub song_count: usize,
    pub created: String,
    pub modified: String,
}

/// Result of a prefix search.
#[derive(Debug, Serialize)]
pub struct SearchListing<'a> {
    pub playlist: &'a str,
    pub prefix: &'a str,
    pub matches: Vec<&'a Song>,
    pub total_matches: usize,
}
