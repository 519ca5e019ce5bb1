//! Command implementations.

pub mod add;
pub mod check;
pub mod config;
pub mod ingest;
pub mod list;

pub use self::add::execute_add;
pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::ingest::execute_ingest;
pub use self::list::execute_list;

use crate::config::Config;
use crate::error::Result;
use roster_extractor::{DocumentFormat, FormatDecoder, RosterIngestor};
use roster_store::SqliteStore;
use std::path::Path;

/// Ingestor over the given database, decoding as `format` or by detection.
pub(crate) fn open_ingestor(
    config: &Config,
    database: &Path,
    format: Option<DocumentFormat>,
) -> Result<RosterIngestor<FormatDecoder, SqliteStore>> {
    let decoder = match format {
        Some(format) => FormatDecoder::fixed(format),
        None => FormatDecoder::auto(),
    };
    let store = SqliteStore::new(database)?;
    Ok(RosterIngestor::try_new(decoder, store, config.extractor.clone())?)
}
