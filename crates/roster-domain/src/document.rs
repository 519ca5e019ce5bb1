//! Decoded document pages

use serde::{Deserialize, Serialize};

/// Text content of a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageContent {
    /// Plain text extracted from the page
    Text(String),

    /// The page could not be read; carries the decoder's reason
    Unreadable(String),
}

/// One page of a decoded document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPage {
    /// 1-based page number
    pub number: u32,

    /// What the decoder recovered
    pub content: PageContent,
}

impl DecodedPage {
    /// Create a page holding text
    pub fn text(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            content: PageContent::Text(text.into()),
        }
    }

    /// Create a page the decoder could not read
    pub fn unreadable(number: u32, reason: impl Into<String>) -> Self {
        Self {
            number,
            content: PageContent::Unreadable(reason.into()),
        }
    }

    /// The page text, if any was recovered
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            PageContent::Text(text) => Some(text),
            PageContent::Unreadable(_) => None,
        }
    }

    /// True when there is no text or only whitespace
    pub fn is_blank(&self) -> bool {
        self.as_text().map_or(true, |t| t.trim().is_empty())
    }
}
