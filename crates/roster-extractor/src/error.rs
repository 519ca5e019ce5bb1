//! Error types for the Extractor
//!
//! Malformed lines are not errors; they come back from the parser as
//! [`NoMatch`](crate::NoMatch) values. These variants cover the failures that
//! abort an ingest.

use thiserror::Error;

/// Errors that can occur while ingesting a document
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The document could not be decoded into pages
    #[error("Decode error: {0}")]
    Decode(String),

    /// Player repository error
    #[error("Store error: {0}")]
    Store(String),

    /// Document exceeds maximum size
    #[error("Document too large: exceeds {0} bytes")]
    DocumentTooLarge(usize),

    /// Reading the document stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A blocking worker failed to complete
    #[error("Task error: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ExtractorError {
    fn from(e: tokio::task::JoinError) -> Self {
        ExtractorError::Task(e.to_string())
    }
}
