//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// trackdex - store playlists and search song titles by prefix
#[derive(Parser, Debug)]
#[command(name = "trackdex", version, about, long_about = None)]
pub struct Cli {
    /// Playlist database file (overrides TRACKDEX_DB and the config file)
    #[arg(short = 'd', long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a playlist document from a JSON file
    Import(ImportArgs),

    /// List stored playlists
    #[command(name = "ls")]
    List(ListArgs),

    /// Show the songs of a playlist
    Show(ShowArgs),

    /// Add a song to a playlist
    Add(AddArgs),

    /// Remove songs with the given title from a playlist
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Find songs in a playlist whose title starts with a prefix
    Search(SearchArgs),

    /// Write a playlist document as JSON
    Export(ExportArgs),

    /// Delete a playlist
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// JSON file with `name`, `platform` and `songs`
    pub file: PathBuf,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Playlist name
    pub playlist: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Playlist name
    pub playlist: String,

    /// Song title
    pub title: String,

    /// Performing artist
    #[arg(short, long, default_value = "")]
    pub artist: String,

    /// Link to the track
    #[arg(short, long, default_value = "")]
    pub link: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Playlist name
    pub playlist: String,

    /// Exact song title to remove
    pub title: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Playlist name
    pub playlist: String,

    /// Title prefix (case-insensitive; empty matches every song)
    #[arg(default_value = "")]
    pub prefix: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Playlist name
    pub playlist: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Playlist name
    pub playlist: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
