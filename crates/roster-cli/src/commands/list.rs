//! List command implementation.

use super::open_ingestor;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use roster_domain::StoredPlayer;

/// Execute the list command.
pub fn execute_list(config: &Config, formatter: &Formatter) -> Result<()> {
    let players = list_players(config)?;
    println!("{}", formatter.format_players(&players)?);
    Ok(())
}

/// Every player in the configured database, in id order.
pub fn list_players(config: &Config) -> Result<Vec<StoredPlayer>> {
    let ingestor = open_ingestor(config, &config.settings.database, None)?;
    Ok(ingestor.get_all_players()?)
}
