//! SQLite-backed playlist store.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed playlist store.
///
/// Owns the database connection. One store per process is the expected use;
/// the connection is not shared between threads.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
