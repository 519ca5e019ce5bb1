//! Roster Domain Layer
//!
//! This crate contains the domain model shared by every other Roster crate.
//! It defines the values the ingest pipeline produces and the trait interfaces
//! the pipeline talks to, without knowing how they are implemented.
//!
//! ## Key Concepts
//!
//! - **PlayerRecord**: One roster entry recovered from a line of page text
//! - **PlayerId**: Identifier assigned by the repository when a record is stored
//! - **DecodedPage**: The text of one document page, as produced by a decoder
//!
//! ## Architecture
//!
//! - Plain values and trait definitions only
//! - Storage and document decoding live in other crates
//! - Dependencies limited to date handling and serialization

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod player;
pub mod traits;

// Re-exports for convenience
pub use document::{DecodedPage, PageContent};
pub use player::{PlayerId, PlayerRecord, StoredPlayer, UNKNOWN_TEAM};
