//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
    format: OutputFormat,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("{}", formatter.info(&format!("Config file: {}", path.display())));
                println!("{}", config.to_toml()?);
            }
        }
        ConfigAction::Init { force } => {
            init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default config to {}", path.display()))
            );
        }
    }

    Ok(())
}

/// Write the default configuration, refusing to replace a file unless forced.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }
    Config::default().save_to(path)
}
