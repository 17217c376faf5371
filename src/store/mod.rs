//! Playlist persistence: repository trait and SQLite implementation

mod repository;
mod schema;
mod sqlite;

pub use repository::{PlaylistRepository, PlaylistSummary, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use sqlite::{SqliteStore, Transaction};
