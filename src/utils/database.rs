//! Provides the SQLite store behind voice-time tracking.
//! Each (user, guild) pair owns one row holding the seconds accumulated over
//! closed sessions and, while the user sits in a voice channel, the time they joined.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use serenity::model::id::{GuildId, UserId};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

/// The filename for the SQLite database when none is configured.
pub const DEFAULT_DB_PATH: &str = "voice_stats.db";

/// Errors that can occur while reading or writing voice activity
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid join timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Database connection lock poisoned")]
    Poisoned,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A user's voice activity within one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSession {
    pub user_id: UserId,
    pub guild_id: GuildId,
    /// Seconds accumulated over closed sessions.
    pub total_seconds: i64,
    /// Set exactly while the user is connected to a voice channel in the guild.
    pub last_join_time: Option<DateTime<Utc>>,
}

impl VoiceSession {
    pub fn is_connected(&self) -> bool {
        self.last_join_time.is_some()
    }

    /// Persisted total plus the live elapsed time of an open session.
    pub fn voice_time(&self, now: DateTime<Utc>) -> i64 {
        self.total_seconds
            + self
                .last_join_time
                .map_or(0, |joined| elapsed_seconds(joined, now))
    }
}

/// Whole seconds between two instants, truncated. A clock that went backwards yields 0.
pub fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_seconds().max(0)
}

/// Single-connection store for the `voice_activity` table.
pub struct VoiceStore {
    conn: Mutex<Connection>,
}

impl VoiceStore {
    /// Opens (creating if needed) the database file and ensures the table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Marks the user as connected since `at`.
    /// A new row starts at zero seconds; an existing row only has its join time replaced.
    pub fn record_join(&self, user_id: UserId, guild_id: GuildId, at: DateTime<Utc>) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO voice_activity (user_id, guild_id, total_seconds, last_join_time)
             VALUES (?1, ?2, 0, ?3)
             ON CONFLICT(user_id, guild_id) DO UPDATE SET last_join_time = excluded.last_join_time",
            params![user_id.get(), guild_id.get(), at.to_rfc3339()],
        )?;
        debug!("Recorded join for user {} in guild {}", user_id, guild_id);
        Ok(())
    }

    /// Closes the user's open session at `at`, returning the seconds added to their total.
    /// Returns `None` without touching the table when no session is open.
    pub fn record_leave(
        &self,
        user_id: UserId,
        guild_id: GuildId,
        at: DateTime<Utc>,
    ) -> StoreResult<Option<i64>> {
        let conn = self.lock()?;

        let Some(joined) = query_session(&conn, user_id, guild_id)?.and_then(|s| s.last_join_time)
        else {
            return Ok(None);
        };

        let elapsed = elapsed_seconds(joined, at);
        conn.execute(
            "UPDATE voice_activity
             SET total_seconds = total_seconds + ?1, last_join_time = NULL
             WHERE user_id = ?2 AND guild_id = ?3",
            params![elapsed, user_id.get(), guild_id.get()],
        )?;
        Ok(Some(elapsed))
    }

    /// Retrieves the stored row for a user in a guild.
    pub fn session(&self, user_id: UserId, guild_id: GuildId) -> StoreResult<Option<VoiceSession>> {
        let conn = self.lock()?;
        query_session(&conn, user_id, guild_id)
    }

    /// Total voice time as of `now`, including a session still in progress.
    /// A user with no record has spent zero seconds. Nothing is written.
    pub fn voice_time(&self, user_id: UserId, guild_id: GuildId, now: DateTime<Utc>) -> StoreResult<i64> {
        Ok(self
            .session(user_id, guild_id)?
            .map_or(0, |session| session.voice_time(now)))
    }
}

/// Creates the `voice_activity` table if it doesn't exist.
fn create_tables(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS voice_activity (
            user_id INTEGER,
            guild_id INTEGER,
            total_seconds INTEGER DEFAULT 0,
            last_join_time TEXT,
            PRIMARY KEY (user_id, guild_id)
        )",
        [],
    )?;
    Ok(())
}

fn query_session(conn: &Connection, user_id: UserId, guild_id: GuildId) -> StoreResult<Option<VoiceSession>> {
    let row: Option<(i64, Option<String>)> = conn
        .query_row(
            "SELECT total_seconds, last_join_time FROM voice_activity
             WHERE user_id = ?1 AND guild_id = ?2",
            params![user_id.get(), guild_id.get()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let Some((total_seconds, last_join)) = row else {
        return Ok(None);
    };

    Ok(Some(VoiceSession {
        user_id,
        guild_id,
        total_seconds,
        last_join_time: last_join.as_deref().map(parse_timestamp).transpose()?,
    }))
}

fn parse_timestamp(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|source| StoreError::Timestamp {
            value: value.to_string(),
            source,
        })
}
