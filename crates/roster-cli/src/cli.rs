//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Roster CLI - Load player rosters from documents into a database.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database file path
    #[arg(short, long, global = true, env = "ROSTER_DATABASE")]
    pub database: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract players from a document and store them
    Ingest(DocumentArgs),

    /// Show what a document would yield without storing anything
    Check(DocumentArgs),

    /// List stored players
    List,

    /// Store a single player
    Add(AddArgs),

    /// Show or write the configuration file
    Config(ConfigArgs),
}

/// Arguments for commands that read a document.
#[derive(Debug, Parser)]
pub struct DocumentArgs {
    /// Document to read
    pub file: PathBuf,

    /// Document format (detected from the content if omitted)
    #[arg(long = "as", value_enum)]
    pub document_format: Option<FormatArg>,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: String,

    /// Team name
    pub team: String,

    /// Player is retired
    #[arg(long)]
    pub retired: bool,

    /// Player is injured
    #[arg(long)]
    pub injured: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Document format argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    /// PDF document
    Pdf,
    /// Plain text, form feed between pages
    Text,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<FormatArg> for roster_extractor::DocumentFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Pdf => roster_extractor::DocumentFormat::Pdf,
            FormatArg::Text => roster_extractor::DocumentFormat::Text,
        }
    }
}
