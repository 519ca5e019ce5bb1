//! Turn document bytes into per-page text

use crate::error::ExtractorError;
use lopdf::Document;
use roster_domain::traits::DocumentDecoder;
use roster_domain::DecodedPage;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";
const PAGE_BREAK: char = '\x0c';

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,
    /// Plain text, pages separated by form feeds
    Text,
}

impl DocumentFormat {
    /// Guess the format from the leading bytes
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(PDF_MAGIC) {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::Text
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Text => write!(f, "text"),
        }
    }
}

/// PDF decoder backed by lopdf
///
/// Pages that fail text extraction come back as unreadable rather than
/// failing the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDecoder;

impl DocumentDecoder for PdfDecoder {
    type Error = ExtractorError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<DecodedPage>, Self::Error> {
        let document = Document::load_mem(bytes)
            .map_err(|e| ExtractorError::Decode(format!("Failed to load PDF: {}", e)))?;

        let pages = document
            .get_pages()
            .into_keys()
            .map(|number| match document.extract_text(&[number]) {
                Ok(text) => DecodedPage::text(number, text),
                Err(e) => {
                    warn!("Page {} could not be read: {}", number, e);
                    DecodedPage::unreadable(number, e.to_string())
                }
            })
            .collect::<Vec<_>>();

        debug!("Decoded PDF with {} pages", pages.len());
        Ok(pages)
    }
}

/// Plain text decoder
///
/// Form feed characters separate pages. Invalid UTF-8 is replaced rather
/// than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl DocumentDecoder for TextDecoder {
    type Error = ExtractorError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<DecodedPage>, Self::Error> {
        let text = String::from_utf8_lossy(bytes);
        let pages = text
            .split(PAGE_BREAK)
            .enumerate()
            .map(|(i, page)| DecodedPage::text(i as u32 + 1, page))
            .collect::<Vec<_>>();

        debug!("Decoded text with {} pages", pages.len());
        Ok(pages)
    }
}

/// Decoder that picks PDF or text per document
///
/// With no fixed format the leading bytes decide.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDecoder {
    format: Option<DocumentFormat>,
}

impl FormatDecoder {
    /// Detect the format of each document
    pub fn auto() -> Self {
        Self { format: None }
    }

    /// Always decode as the given format
    pub fn fixed(format: DocumentFormat) -> Self {
        Self {
            format: Some(format),
        }
    }
}

impl DocumentDecoder for FormatDecoder {
    type Error = ExtractorError;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<DecodedPage>, Self::Error> {
        let format = self.format.unwrap_or_else(|| DocumentFormat::detect(bytes));
        debug!("Decoding document as {}", format);

        match format {
            DocumentFormat::Pdf => PdfDecoder.decode(bytes),
            DocumentFormat::Text => TextDecoder.decode(bytes),
        }
    }
}
