//! Roster Extractor
//!
//! Recovers player records from the text of roster documents and stores them.
//!
//! # Overview
//!
//! Roster pages list one player per line with no delimiters between fields:
//!
//! ```text
//! LeBron James 1984-12-30 Los Angeles Lakers No No
//! ```
//!
//! The first `YYYY-MM-DD` date splits each line. Two name tokens come before
//! it; team words and two status markers (retired, injured) come after it.
//! Lines that do not fit are reported and skipped, never fatal.
//!
//! # Architecture
//!
//! ```text
//! bytes → DocumentDecoder → pages → PageBatchExtractor → LineRecordParser
//!                                          ↓
//!                                   PlayerRepository
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use roster_extractor::{ExtractorConfig, RosterIngestor, TextDecoder};
//! use roster_store::SqliteStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new("roster.db")?;
//! let ingestor = RosterIngestor::new(TextDecoder, store, ExtractorConfig::default());
//!
//! let file = tokio::fs::File::open("roster.txt").await?;
//! let report = ingestor.upload_and_save(file).await?;
//!
//! println!("Added {} players", report.players_added);
//! println!("Rejected {} lines", report.lines_rejected);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod decoder;
mod error;
mod ingestor;
mod page;
mod parser;
pub mod rules;
mod types;


pub use config::{ExtractorConfig, NamePolicy};
pub use decoder::{DocumentFormat, FormatDecoder, PdfDecoder, TextDecoder};
pub use error::ExtractorError;
pub use ingestor::RosterIngestor;
pub use page::PageBatchExtractor;
pub use parser::LineRecordParser;
pub use types::{
    DocumentExtraction, IngestReport, NoMatch, NoMatchReason, PageExtraction, PageOutcome,
    PageSkip, ParsedLine, RejectedLine, StatusTokens,
};
