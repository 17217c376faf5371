//! PlaylistRepository trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Platform, Playlist, Song};
use crate::store::{PlaylistRepository, PlaylistSummary, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

impl PlaylistRepository for SqliteStore {
    fn store_playlist(&mut self, playlist: &Playlist) -> StoreResult<()> {
        let now = Utc::now().to_rfc3339();
        let tx = self.transaction()?;

        tx.execute(
            "INSERT INTO playlists (name, platform, created, modified) VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(name) DO UPDATE SET platform = excluded.platform, modified = excluded.modified",
            params![playlist.name(), playlist.platform().as_str(), now],
        )?;

        let id = find_playlist_id(tx.conn(), playlist.name())?.ok_or_else(|| {
            StoreError::PlaylistNotFound {
                name: playlist.name().to_string(),
            }
        })?;

        tx.execute("DELETE FROM songs WHERE playlist_id = ?", [id])?;
        {
            let mut stmt = tx.conn().prepare(
                "INSERT INTO songs (playlist_id, position, title, artist, link)
                 VALUES (?, ?, ?, ?, ?)",
            )?;
            for (position, song) in (0_i64..).zip(playlist.songs()) {
                stmt.execute(params![id, position, song.title(), song.artist(), song.link()])?;
            }
        }

        tx.commit()?;
        tracing::info!(
            playlist = playlist.name(),
            songs = playlist.songs().len(),
            "stored playlist"
        );
        Ok(())
    }

    fn get_playlist(&self, name: &str) -> StoreResult<Option<Playlist>> {
        let row = self.conn.query_row(
            "SELECT id, name, platform FROM playlists WHERE name = ?",
            [name],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        );

        let (id, stored_name, platform_str) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        let platform = parse_platform(&platform_str)?;

        let songs: Vec<Song> = self
            .conn
            .prepare(
                "SELECT title, artist, link FROM songs WHERE playlist_id = ? ORDER BY position",
            )?
            .query_map([id], |row| {
                Ok(Song::new(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<_, _>>()?;

        let playlist = Playlist::new(&stored_name, platform)
            .map_err(|e| StoreError::InvalidData(e.to_string()))?
            .with_songs(songs);
        Ok(Some(playlist))
    }

    fn list_playlists(&self) -> StoreResult<Vec<PlaylistSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name, p.platform, p.created, p.modified, COUNT(s.position)
             FROM playlists p
             LEFT JOIN songs s ON s.playlist_id = p.id
             GROUP BY p.id
             ORDER BY p.name",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(name, platform, created, modified, count)| -> StoreResult<PlaylistSummary> {
                let song_count = usize::try_from(count)
                    .map_err(|e| StoreError::InvalidData(format!("invalid song count: {}", e)))?;
                Ok(PlaylistSummary::new(
                    name,
                    parse_platform(&platform)?,
                    song_count,
                    parse_timestamp(&created)?,
                    parse_timestamp(&modified)?,
                ))
            })
            .collect()
    }

    fn add_song(&mut self, name: &str, song: &Song) -> StoreResult<()> {
        let tx = self.transaction()?;
        let id = find_playlist_id(tx.conn(), name)?.ok_or_else(|| StoreError::PlaylistNotFound {
            name: name.to_string(),
        })?;

        tx.execute(
            "INSERT INTO songs (playlist_id, position, title, artist, link)
             VALUES (?1, (SELECT COALESCE(MAX(position) + 1, 0) FROM songs WHERE playlist_id = ?1), ?2, ?3, ?4)",
            params![id, song.title(), song.artist(), song.link()],
        )?;
        touch(&tx, id)?;
        tx.commit()?;

        tracing::debug!(playlist = name, title = song.title(), "added song");
        Ok(())
    }

    fn remove_song(&mut self, name: &str, title: &str) -> StoreResult<usize> {
        let tx = self.transaction()?;
        let id = find_playlist_id(tx.conn(), name)?.ok_or_else(|| StoreError::PlaylistNotFound {
            name: name.to_string(),
        })?;

        let removed = tx.execute(
            "DELETE FROM songs WHERE playlist_id = ? AND title = ?",
            params![id, title],
        )?;
        if removed > 0 {
            touch(&tx, id)?;
        }
        tx.commit()?;

        tracing::debug!(playlist = name, title, removed, "removed songs");
        Ok(removed)
    }

    fn delete_playlist(&mut self, name: &str) -> StoreResult<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM playlists WHERE name = ?", [name])?;
        tracing::debug!(playlist = name, deleted = deleted > 0, "deleted playlist");
        Ok(deleted > 0)
    }
}

fn find_playlist_id(conn: &Connection, name: &str) -> StoreResult<Option<i64>> {
    match conn.query_row("SELECT id FROM playlists WHERE name = ?", [name], |row| {
        row.get::<_, i64>(0)
    }) {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::Database(e)),
    }
}

fn touch(tx: &super::Transaction<'_>, id: i64) -> StoreResult<()> {
    tx.execute(
        "UPDATE playlists SET modified = ? WHERE id = ?",
        params![Utc::now().to_rfc3339(), id],
    )?;
    Ok(())
}

fn parse_platform(s: &str) -> StoreResult<Platform> {
    s.parse()
        .map_err(|e: crate::domain::ParsePlatformError| StoreError::InvalidData(e.to_string()))
}

fn parse_timestamp(s: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("invalid timestamp '{}': {}", s, e)))
}
