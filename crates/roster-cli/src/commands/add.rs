//! Add command implementation.

use super::open_ingestor;
use crate::cli::AddArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::NaiveDate;
use roster_domain::{PlayerId, PlayerRecord};
use roster_extractor::rules::parse_exact_date;

/// Execute the add command.
pub fn execute_add(args: AddArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let record = build_record(args)?;
    let id = add_player(&record, config)?;
    println!("{}", formatter.player_added(id, &record));
    Ok(())
}

/// Store one player in the configured database.
pub fn add_player(record: &PlayerRecord, config: &Config) -> Result<PlayerId> {
    let ingestor = open_ingestor(config, &config.settings.database, None)?;
    Ok(ingestor.add_player(record)?)
}

/// Build a record from command arguments.
pub fn build_record(args: AddArgs) -> Result<PlayerRecord> {
    let first_name = required("first name", &args.first_name)?;
    let last_name = required("last name", &args.last_name)?;
    let date_of_birth = parse_date(&args.date_of_birth)?;

    Ok(PlayerRecord::new(
        first_name,
        last_name,
        date_of_birth,
        args.team.split_whitespace().collect::<Vec<_>>().join(" "),
        args.retired,
        args.injured,
    ))
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CliError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Parse a date written exactly as `YYYY-MM-DD`, by the same rule the parser applies.
fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_exact_date(input).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Invalid date of birth '{}'. Expected YYYY-MM-DD",
            input
        ))
    })
}
