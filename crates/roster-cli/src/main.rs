//! Roster CLI - Load player rosters from documents into a database.

use clap::Parser;
use roster_cli::config::OutputFormat;
use roster_cli::{app, logging, Cli, Formatter};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let color_enabled = !cli.no_color;

    if let Err(e) = app::run(cli).await {
        let formatter = Formatter::new(OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}
