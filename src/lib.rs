//! trackdex - playlists with case-insensitive prefix search over song titles

pub mod cli;
pub mod domain;
pub mod index;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_delete, handle_export, handle_import, handle_list, handle_remove,
        handle_search, handle_show,
    },
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(cli.verbose, config.log.as_deref()).context("failed to set up logging")?;

    let db_path = config.db_path(cli.db.as_ref());
    tracing::debug!(db = %db_path.display(), "resolved playlist store");

    match &cli.command {
        Command::Import(args) => handle_import(args, &db_path),
        Command::List(args) => handle_list(args, &db_path),
        Command::Show(args) => handle_show(args, &db_path),
        Command::Add(args) => handle_add(args, &db_path),
        Command::Remove(args) => handle_remove(args, &db_path),
        Command::Search(args) => handle_search(args, &db_path),
        Command::Export(args) => handle_export(args, &db_path),
        Command::Delete(args) => handle_delete(args, &db_path),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "trackdex",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
