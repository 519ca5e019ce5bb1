//! Check command implementation.

use super::open_ingestor;
use crate::cli::DocumentArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use roster_extractor::{DocumentExtraction, DocumentFormat};
use std::path::Path;

/// Execute the check command.
pub async fn execute_check(
    args: DocumentArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let extraction = check_file(&args.file, args.document_format.map(Into::into), config).await?;
    println!("{}", formatter.format_extraction(&extraction)?);
    Ok(())
}

/// Decode and extract a document without touching the configured database.
pub async fn check_file(
    path: &Path,
    format: Option<DocumentFormat>,
    config: &Config,
) -> Result<DocumentExtraction> {
    let ingestor = open_ingestor(config, Path::new(":memory:"), format)?;
    let file = tokio::fs::File::open(path).await?;
    Ok(ingestor.inspect(file).await?)
}
