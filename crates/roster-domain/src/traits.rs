//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the ingest pipeline and
//! infrastructure. Implementations live in other crates.

use crate::{DecodedPage, PlayerId, PlayerRecord, StoredPlayer};

/// Trait for storing and retrieving players
///
/// Implemented by the infrastructure layer (roster-store)
pub trait PlayerRepository {
    /// Error type for repository operations
    type Error;

    /// Store a single player and return its new id
    fn create(&mut self, player: &PlayerRecord) -> Result<PlayerId, Self::Error>;

    /// Store a batch of players
    ///
    /// Implementations must be all-or-nothing: on error, none of the batch is kept.
    /// Returned ids are in the same order as `players`.
    fn create_many(&mut self, players: &[PlayerRecord]) -> Result<Vec<PlayerId>, Self::Error>;

    /// Get a player by id
    fn get(&self, id: PlayerId) -> Result<Option<StoredPlayer>, Self::Error>;

    /// List every stored player in id order
    fn list_all(&self) -> Result<Vec<StoredPlayer>, Self::Error>;
}

/// Trait for turning a binary document into per-page text
///
/// Implemented by the application layer (roster-extractor)
pub trait DocumentDecoder {
    /// Error type for decoding the document as a whole
    type Error;

    /// Decode every page, in page order
    ///
    /// A page that cannot be read is returned as unreadable rather than
    /// failing the whole document.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<DecodedPage>, Self::Error>;
}
