//! Resolve configuration for a parsed command line and dispatch it.

use crate::cli::{Cli, Command, ConfigAction, ConfigArgs};
use crate::commands::{execute_add, execute_check, execute_config, execute_ingest, execute_list};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use tracing::{debug, warn};

/// Run one parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    // Load config, falling back to defaults when there is no file
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        // A broken file must not block rewriting it
        Err(e) if matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ) => {
            warn!("Ignoring unreadable config {}: {}", config_path.display(), e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    debug!("Using config {}", config_path.display());

    if let Some(database) = cli.database {
        config.settings.database = database;
    }

    // Determine output format
    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Ingest(args) => {
            execute_ingest(args, &config, &formatter).await?;
        }
        Command::Check(args) => {
            execute_check(args, &config, &formatter).await?;
        }
        Command::List => {
            execute_list(&config, &formatter)?;
        }
        Command::Add(args) => {
            execute_add(args, &config, &formatter)?;
        }
        Command::Config(args) => {
            execute_config(args, &config, &config_path, &formatter, format)?;
        }
    }

    Ok(())
}
