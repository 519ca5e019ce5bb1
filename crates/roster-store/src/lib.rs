//! Roster Storage Layer
//!
//! Implements the PlayerRepository trait on top of SQLite.
//!
//! # Architecture
//!
//! - One `players` table, keyed by an auto-increment id
//! - Dates stored as ISO `YYYY-MM-DD` text
//! - Batch inserts run in a single transaction
//!
//! # Examples
//!
//! ```no_run
//! use roster_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for player operations
//! ```

#![warn(missing_docs)]

use chrono::NaiveDate;
use roster_domain::traits::PlayerRepository;
use roster_domain::{PlayerId, PlayerRecord, StoredPlayer};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_PLAYER: &str =
    "SELECT id, first_name, last_name, date_of_birth, team, retired, injured FROM players";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of PlayerRepository
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a store across tasks behind a
/// mutex, or give each thread its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roster_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("roster.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Number of stored players
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Convert a date to its stored text form
    fn date_to_text(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Convert stored text back to a date
    fn text_to_date(text: &str) -> Result<NaiveDate, StoreError> {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|e| StoreError::InvalidData(format!("Invalid date '{}': {}", text, e)))
    }

    fn insert(conn: &Connection, player: &PlayerRecord) -> Result<PlayerId, StoreError> {
        conn.execute(
            "INSERT INTO players (first_name, last_name, date_of_birth, team, retired, injured)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &player.first_name,
                &player.last_name,
                Self::date_to_text(player.date_of_birth),
                &player.team,
                player.retired,
                player.injured,
            ],
        )?;
        Ok(PlayerId::from_value(conn.last_insert_rowid()))
    }

    fn row_to_player(row: &Row<'_>) -> rusqlite::Result<StoredPlayer> {
        let dob_text: String = row.get(3)?;
        let date_of_birth = Self::text_to_date(&dob_text).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(StoredPlayer {
            id: PlayerId::from_value(row.get(0)?),
            record: PlayerRecord {
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                date_of_birth,
                team: row.get(4)?,
                retired: row.get(5)?,
                injured: row.get(6)?,
            },
        })
    }
}

impl PlayerRepository for SqliteStore {
    type Error = StoreError;

    fn create(&mut self, player: &PlayerRecord) -> Result<PlayerId, Self::Error> {
        Self::insert(&self.conn, player)
    }

    fn create_many(&mut self, players: &[PlayerRecord]) -> Result<Vec<PlayerId>, Self::Error> {
        // Dropping the transaction without commit rolls the whole batch back
        let tx = self.conn.transaction()?;
        let ids = players
            .iter()
            .map(|player| Self::insert(&tx, player))
            .collect::<Result<Vec<_>, _>>()?;
        tx.commit()?;

        debug!("Stored {} players", ids.len());
        Ok(ids)
    }

    fn get(&self, id: PlayerId) -> Result<Option<StoredPlayer>, Self::Error> {
        let player = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_PLAYER),
                params![id.value()],
                Self::row_to_player,
            )
            .optional()?;

        Ok(player)
    }

    fn list_all(&self) -> Result<Vec<StoredPlayer>, Self::Error> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_PLAYER))?;
        let players = stmt
            .query_map([], Self::row_to_player)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }
}
