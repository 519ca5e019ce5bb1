//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use roster_domain::{PlayerId, PlayerRecord, StoredPlayer};
use roster_extractor::{DocumentExtraction, IngestReport, PageSkip};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format stored players.
    pub fn format_players(&self, players: &[StoredPlayer]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(players)?),
            OutputFormat::Table => Ok(self.format_players_table(players)),
            OutputFormat::Quiet => Ok(join_ids(players.iter().map(|p| p.id))),
        }
    }

    fn format_players_table(&self, players: &[StoredPlayer]) -> String {
        if players.is_empty() {
            return self.colorize("No players found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "First Name", "Last Name", "Born", "Team", "Retired", "Injured"]);
        for player in players {
            let mut row = vec![player.id.to_string()];
            row.extend(record_cells(&player.record));
            builder.push_record(row);
        }

        render(builder)
    }

    /// Format the result of an ingest.
    pub fn format_report(&self, report: &IngestReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(join_ids(report.player_ids.iter().copied())),
            OutputFormat::Table => {
                let mut lines = vec![self.success(&format!(
                    "Added {} player(s) in {} ms",
                    report.players_added, report.processing_time_ms
                ))];
                if report.pages_skipped > 0 {
                    lines.push(self.warning(&format!(
                        "Skipped {} of {} page(s)",
                        report.pages_skipped, report.pages_total
                    )));
                }
                if report.lines_rejected > 0 {
                    lines.push(self.warning(&format!(
                        "Rejected {} line(s); run 'check' for details",
                        report.lines_rejected
                    )));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a dry-run extraction, page by page.
    pub fn format_extraction(&self, extraction: &DocumentExtraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
            OutputFormat::Quiet => Ok(extraction.record_count().to_string()),
            OutputFormat::Table => Ok(self.format_extraction_table(extraction)),
        }
    }

    fn format_extraction_table(&self, extraction: &DocumentExtraction) -> String {
        let mut sections = Vec::new();

        for page in &extraction.pages {
            let heading = format!("Page {}", page.number);
            match &page.skipped {
                Some(PageSkip::Blank) => {
                    sections.push(self.info(&format!("{}: blank", heading)));
                    continue;
                }
                Some(PageSkip::Unreadable(reason)) => {
                    sections.push(self.warning(&format!("{}: unreadable ({})", heading, reason)));
                    continue;
                }
                None => {}
            }

            let page_extraction = &page.extraction;
            sections.push(self.info(&format!(
                "{}: {} player(s), {} rejected, {} header(s)",
                heading,
                page_extraction.records.len(),
                page_extraction.rejected.len(),
                page_extraction.headers_skipped
            )));

            if !page_extraction.records.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["First Name", "Last Name", "Born", "Team", "Retired", "Injured"]);
                for record in &page_extraction.records {
                    builder.push_record(record_cells(record));
                }
                sections.push(render(builder));
            }

            if !page_extraction.rejected.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Line", "Reason", "Text"]);
                for rejected in &page_extraction.rejected {
                    builder.push_record([
                        rejected.line_number.to_string(),
                        rejected.reason.to_string(),
                        rejected.text.clone(),
                    ]);
                }
                sections.push(render(builder));
            }
        }

        sections.push(self.success(&format!(
            "{} player(s) found, {} line(s) rejected, {} page(s) skipped",
            extraction.record_count(),
            extraction.lines_rejected(),
            extraction.pages_skipped()
        )));

        sections.join("\n")
    }

    /// Format the id of a newly added player.
    pub fn player_added(&self, id: PlayerId, record: &PlayerRecord) -> String {
        match self.format {
            OutputFormat::Quiet => id.to_string(),
            OutputFormat::Json => serde_json::json!({ "id": id }).to_string(),
            OutputFormat::Table => {
                self.success(&format!("Player added: {} ({})", id, record.full_name()))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn record_cells(record: &PlayerRecord) -> Vec<String> {
    vec![
        record.first_name.clone(),
        record.last_name.clone(),
        record.date_of_birth.to_string(),
        record.team.clone(),
        yes_no(record.retired).to_string(),
        yes_no(record.injured).to_string(),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn join_ids(ids: impl Iterator<Item = PlayerId>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join("\n")
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_extractor::{NoMatchReason, PageExtraction, PageOutcome, RejectedLine};

    fn create_test_player(id: i64) -> StoredPlayer {
        StoredPlayer {
            id: PlayerId::from_value(id),
            record: PlayerRecord::new(
                "LeBron",
                "James",
                NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
                "Los Angeles Lakers",
                false,
                false,
            ),
        }
    }

    fn create_test_report() -> IngestReport {
        IngestReport {
            players_added: 2,
            player_ids: vec![PlayerId::from_value(7), PlayerId::from_value(8)],
            pages_total: 3,
            pages_skipped: 1,
            lines_rejected: 4,
            processing_time_ms: 12,
        }
    }

    #[test]
    fn test_players_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_players(&[create_test_player(1)]).unwrap();
        assert!(output.contains("Last Name"));
        assert!(output.contains("Los Angeles Lakers"));
        assert!(output.contains("1984-12-30"));
    }

    #[test]
    fn test_players_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_players(&[create_test_player(1)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["first_name"], "LeBron");
        assert_eq!(value[0]["date_of_birth"], "1984-12-30");
    }

    #[test]
    fn test_players_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let players = [create_test_player(3), create_test_player(4)];
        assert_eq!(formatter.format_players(&players).unwrap(), "3\n4");
    }

    #[test]
    fn test_empty_players() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_players(&[]).unwrap();
        assert!(output.contains("No players found"));
    }

    #[test]
    fn test_report_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        assert!(output.contains("Added 2 player(s)"));
        assert!(output.contains("Skipped 1 of 3 page(s)"));
        assert!(output.contains("Rejected 4 line(s)"));
    }

    #[test]
    fn test_report_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        assert_eq!(output, "7\n8");
    }

    #[test]
    fn test_extraction_table_lists_rejections() {
        let extraction = DocumentExtraction {
            pages: vec![
                PageOutcome {
                    number: 1,
                    skipped: None,
                    extraction: PageExtraction {
                        records: vec![create_test_player(1).record],
                        rejected: vec![RejectedLine {
                            line_number: 4,
                            text: "Magic 1959-08-14 Lakers Yes No".to_string(),
                            reason: NoMatchReason::InsufficientNameTokens,
                        }],
                        headers_skipped: 1,
                    },
                },
                PageOutcome {
                    number: 2,
                    skipped: Some(PageSkip::Unreadable("bad stream".to_string())),
                    extraction: PageExtraction::default(),
                },
            ],
        };

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_extraction(&extraction).unwrap();

        assert!(output.contains("Page 1: 1 player(s), 1 rejected, 1 header(s)"));
        assert!(output.contains("insufficient name"));
        assert!(output.contains("Magic 1959-08-14 Lakers Yes No"));
        assert!(output.contains("Page 2: unreadable (bad stream)"));
        assert!(output.contains("1 player(s) found, 1 line(s) rejected, 1 page(s) skipped"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
