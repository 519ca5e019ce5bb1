//! Document ingest: decode, extract, persist

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::page::PageBatchExtractor;
use crate::types::{DocumentExtraction, IngestReport, PageExtraction, PageOutcome, PageSkip};
use roster_domain::traits::{DocumentDecoder, PlayerRepository};
use roster_domain::{DecodedPage, PageContent, PlayerId, PlayerRecord, StoredPlayer};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, warn};

/// Reads roster documents and stores the players found in them
pub struct RosterIngestor<D, R>
where
    D: DocumentDecoder,
    R: PlayerRepository,
{
    decoder: Arc<D>,
    store: Arc<Mutex<R>>,
    extractor: PageBatchExtractor,
    config: ExtractorConfig,
}

impl<D, R> RosterIngestor<D, R>
where
    D: DocumentDecoder + Send + Sync + 'static,
    R: PlayerRepository,
    D::Error: std::fmt::Display + Send + 'static,
    R::Error: std::fmt::Display,
{
    /// Create a new ingestor
    pub fn new(decoder: D, store: R, config: ExtractorConfig) -> Self {
        Self {
            decoder: Arc::new(decoder),
            store: Arc::new(Mutex::new(store)),
            extractor: PageBatchExtractor::new(&config),
            config,
        }
    }

    /// Create a new ingestor after validating the configuration
    pub fn try_new(decoder: D, store: R, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self::new(decoder, store, config))
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read a document, extract its players and store them in one batch
    ///
    /// Nothing is stored when the document holds no players. A store failure
    /// leaves the repository unchanged.
    pub async fn upload_and_save<Rd>(&self, reader: Rd) -> Result<IngestReport, ExtractorError>
    where
        Rd: AsyncRead + Unpin,
    {
        let start = Instant::now();

        let extraction = self.inspect(reader).await?;
        let records = extraction.records();

        let player_ids = if records.is_empty() {
            info!("No players found in document, nothing to store");
            Vec::new()
        } else {
            self.persist(&records)?
        };

        let report = IngestReport {
            players_added: player_ids.len(),
            player_ids,
            pages_total: extraction.pages.len(),
            pages_skipped: extraction.pages_skipped(),
            lines_rejected: extraction.lines_rejected(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Ingest complete: {} players added, {} pages ({} skipped), {} lines rejected",
            report.players_added, report.pages_total, report.pages_skipped, report.lines_rejected
        );

        Ok(report)
    }

    /// Read and decode a document and extract its players without storing them
    pub async fn inspect<Rd>(&self, reader: Rd) -> Result<DocumentExtraction, ExtractorError>
    where
        Rd: AsyncRead + Unpin,
    {
        let bytes = self.read_document(reader).await?;
        info!("Read document of {} bytes", bytes.len());

        let pages = self.decode(bytes).await?;
        Ok(self.extract_pages(&pages))
    }

    /// Run the page extractor over decoded pages, skipping blank and unreadable ones
    pub fn extract_pages(&self, pages: &[DecodedPage]) -> DocumentExtraction {
        let pages = pages
            .iter()
            .map(|page| {
                let skipped = match &page.content {
                    PageContent::Unreadable(reason) => {
                        warn!("Skipping unreadable page {}: {}", page.number, reason);
                        Some(PageSkip::Unreadable(reason.clone()))
                    }
                    PageContent::Text(text) => {
                        debug!("Page {} text:\n{}", page.number, text);
                        if text.trim().is_empty() {
                            debug!("Skipping blank page {}", page.number);
                            Some(PageSkip::Blank)
                        } else {
                            None
                        }
                    }
                };

                let extraction = match (&skipped, page.as_text()) {
                    (None, Some(text)) => self.extractor.extract_report(text),
                    _ => PageExtraction::default(),
                };

                PageOutcome {
                    number: page.number,
                    skipped,
                    extraction,
                }
            })
            .collect();

        DocumentExtraction { pages }
    }

    /// List every stored player
    pub fn get_all_players(&self) -> Result<Vec<StoredPlayer>, ExtractorError> {
        let store = self.lock_store()?;
        store
            .list_all()
            .map_err(|e| ExtractorError::Store(e.to_string()))
    }

    /// Store a single player
    pub fn add_player(&self, record: &PlayerRecord) -> Result<PlayerId, ExtractorError> {
        let mut store = self.lock_store()?;
        let id = store
            .create(record)
            .map_err(|e| ExtractorError::Store(e.to_string()))?;

        info!("Added player {} ({})", id, record.full_name());
        Ok(id)
    }

    async fn read_document<Rd>(&self, reader: Rd) -> Result<Vec<u8>, ExtractorError>
    where
        Rd: AsyncRead + Unpin,
    {
        let limit = self.config.max_document_bytes;
        let mut bytes = Vec::new();

        // One byte past the limit is enough to tell an oversized document
        reader
            .take(limit as u64 + 1)
            .read_to_end(&mut bytes)
            .await?;

        if bytes.len() > limit {
            return Err(ExtractorError::DocumentTooLarge(limit));
        }
        Ok(bytes)
    }

    async fn decode(&self, bytes: Vec<u8>) -> Result<Vec<DecodedPage>, ExtractorError> {
        let decoder = Arc::clone(&self.decoder);
        let pages = tokio::task::spawn_blocking(move || decoder.decode(&bytes))
            .await?
            .map_err(|e| ExtractorError::Decode(e.to_string()))?;

        debug!("Decoded {} pages", pages.len());
        Ok(pages)
    }

    fn persist(&self, records: &[PlayerRecord]) -> Result<Vec<PlayerId>, ExtractorError> {
        let mut store = self.lock_store()?;
        let ids = store
            .create_many(records)
            .map_err(|e| ExtractorError::Store(e.to_string()))?;

        debug!("Stored {} players", ids.len());
        Ok(ids)
    }

    fn lock_store(&self) -> Result<std::sync::MutexGuard<'_, R>, ExtractorError> {
        self.store
            .lock()
            .map_err(|e| ExtractorError::Store(format!("Store lock poisoned: {}", e)))
    }
}
