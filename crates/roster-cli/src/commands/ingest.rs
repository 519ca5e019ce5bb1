//! Ingest command implementation.

use super::open_ingestor;
use crate::cli::DocumentArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use roster_extractor::{DocumentFormat, IngestReport};
use std::path::Path;

/// Execute the ingest command.
pub async fn execute_ingest(
    args: DocumentArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let report = ingest_file(&args.file, args.document_format.map(Into::into), config).await?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Read a document from disk and store its players in the configured database.
pub async fn ingest_file(
    path: &Path,
    format: Option<DocumentFormat>,
    config: &Config,
) -> Result<IngestReport> {
    let ingestor = open_ingestor(config, &config.settings.database, format)?;
    let file = tokio::fs::File::open(path).await?;
    Ok(ingestor.upload_and_save(file).await?)
}
