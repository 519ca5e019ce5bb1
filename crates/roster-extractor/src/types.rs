//! Result types for line parsing, page extraction and ingest

use roster_domain::{PlayerId, PlayerRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a line did not yield a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    /// No `YYYY-MM-DD` shaped text in the line
    NoDateFound,

    /// Fewer than two tokens before the date
    InsufficientNameTokens,

    /// Fewer than three tokens after the date
    InsufficientTailTokens,

    /// The date-shaped text is not a calendar date
    InvalidDateFormat,
}

impl NoMatchReason {
    /// Short human-readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            NoMatchReason::NoDateFound => "no date",
            NoMatchReason::InsufficientNameTokens => "insufficient name",
            NoMatchReason::InsufficientTailTokens => "insufficient tail",
            NoMatchReason::InvalidDateFormat => "bad date",
        }
    }
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line that did not parse, with the reason
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{reason}: {line:?}")]
pub struct NoMatch {
    /// Rejection reason
    pub reason: NoMatchReason,

    /// The line as given to the parser
    pub line: String,
}

impl NoMatch {
    /// Create a new NoMatch
    pub fn new(reason: NoMatchReason, line: impl Into<String>) -> Self {
        Self {
            reason,
            line: line.into(),
        }
    }
}

/// The two trailing status tokens as they appeared in the line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTokens {
    /// Raw retired marker
    pub retired: String,

    /// Raw injured marker
    pub injured: String,
}

/// A successfully parsed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// The recovered player
    pub record: PlayerRecord,

    /// Raw status tokens behind `record.retired` and `record.injured`
    pub status_tokens: StatusTokens,

    /// Name tokens the name policy dropped
    pub discarded_name_tokens: Vec<String>,
}

/// A line of a page that was parsed but rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedLine {
    /// 1-based line number within the page
    pub line_number: usize,

    /// The trimmed line text
    pub text: String,

    /// Rejection reason
    pub reason: NoMatchReason,
}

/// Everything extracted from a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageExtraction {
    /// Players in line order
    pub records: Vec<PlayerRecord>,

    /// Lines that reached the parser and were rejected
    pub rejected: Vec<RejectedLine>,

    /// Lines skipped as table headers
    pub headers_skipped: usize,
}

/// Why a page was not run through the extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSkip {
    /// The page had no text, or only whitespace
    Blank,

    /// The decoder could not read the page
    Unreadable(String),
}

/// Outcome of one decoded page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOutcome {
    /// 1-based page number
    pub number: u32,

    /// Set when the page was skipped
    pub skipped: Option<PageSkip>,

    /// Extraction results; empty for skipped pages
    pub extraction: PageExtraction,
}

/// Extraction results for a whole document, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentExtraction {
    /// Per-page outcomes
    pub pages: Vec<PageOutcome>,
}

impl DocumentExtraction {
    /// All players across pages, in document order
    pub fn records(&self) -> Vec<PlayerRecord> {
        self.pages
            .iter()
            .flat_map(|p| p.extraction.records.iter().cloned())
            .collect()
    }

    /// Number of players found
    pub fn record_count(&self) -> usize {
        self.pages.iter().map(|p| p.extraction.records.len()).sum()
    }

    /// Number of pages skipped as blank or unreadable
    pub fn pages_skipped(&self) -> usize {
        self.pages.iter().filter(|p| p.skipped.is_some()).count()
    }

    /// Number of rejected lines across pages
    pub fn lines_rejected(&self) -> usize {
        self.pages.iter().map(|p| p.extraction.rejected.len()).sum()
    }
}

/// Result of an ingest operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Number of players stored
    pub players_added: usize,

    /// Ids of the stored players, in document order
    pub player_ids: Vec<PlayerId>,

    /// Pages in the document
    pub pages_total: usize,

    /// Pages skipped as blank or unreadable
    pub pages_skipped: usize,

    /// Lines rejected by the parser
    pub lines_rejected: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
