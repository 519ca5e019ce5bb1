//! Extract every player from one page of text

use crate::config::ExtractorConfig;
use crate::parser::LineRecordParser;
use crate::types::{PageExtraction, RejectedLine};
use roster_domain::PlayerRecord;
use tracing::debug;

/// Runs the line parser over a page, one line at a time
///
/// Blank lines and table headers are skipped. A line that fails to parse is
/// recorded and skipped; it never stops the rest of the page.
#[derive(Debug, Clone)]
pub struct PageBatchExtractor {
    parser: LineRecordParser,
    header_markers: Vec<String>,
}

impl PageBatchExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            parser: LineRecordParser::new(config),
            header_markers: config.header_markers.clone(),
        }
    }

    /// The line parser used for each line
    pub fn parser(&self) -> &LineRecordParser {
        &self.parser
    }

    /// True if the line contains a header marker
    pub fn is_header(&self, line: &str) -> bool {
        self.header_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
    }

    /// Extract the players on a page, in line order
    pub fn extract(&self, page_text: &str) -> Vec<PlayerRecord> {
        self.extract_report(page_text).records
    }

    /// Extract the players on a page, keeping track of rejected lines
    pub fn extract_report(&self, page_text: &str) -> PageExtraction {
        let mut extraction = PageExtraction::default();

        for (idx, raw) in page_text.split('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if self.is_header(line) {
                debug!("Skipping header line {}: {}", idx + 1, line);
                extraction.headers_skipped += 1;
                continue;
            }

            match self.parser.parse(line) {
                Ok(parsed) => extraction.records.push(parsed.record),
                Err(no_match) => extraction.rejected.push(RejectedLine {
                    line_number: idx + 1,
                    text: no_match.line,
                    reason: no_match.reason,
                }),
            }
        }

        debug!(
            "Page yielded {} players, {} rejected lines, {} headers",
            extraction.records.len(),
            extraction.rejected.len(),
            extraction.headers_skipped
        );

        extraction
    }
}

impl Default for PageBatchExtractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoMatchReason;

    const LEBRON: &str = "LeBron James 1984-12-30 Los Angeles Lakers No No";
    const HEADER: &str = "First Name Last Name Date of Birth Team Retired Injured";
    const MAGIC: &str = "Magic 1959-08-14 Lakers Yes No";

    #[test]
    fn test_mixed_page_yields_only_good_line() {
        let page = [LEBRON, "", HEADER, MAGIC].join("\n");
        let records = PageBatchExtractor::default().extract(&page);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "LeBron");
        assert_eq!(records[0].team, "Los Angeles Lakers");
    }

    #[test]
    fn test_header_line_never_parsed() {
        // Matches the date-anchored shape but carries a header marker
        let line = "Date of Birth 1984-12-30 Los Angeles Lakers No No";
        let extraction = PageBatchExtractor::default().extract_report(line);

        assert!(extraction.records.is_empty());
        assert!(extraction.rejected.is_empty());
        assert_eq!(extraction.headers_skipped, 1);
    }

    #[test]
    fn test_each_header_marker_skips() {
        let extractor = PageBatchExtractor::default();
        for marker in ["First Name", "Last Name", "Date of Birth"] {
            let line = format!("{} Kobe Bryant 1978-08-23 Lakers Yes No", marker);
            assert!(extractor.extract(&line).is_empty(), "{} should skip", marker);
        }
    }

    #[test]
    fn test_header_markers_are_case_sensitive() {
        let extractor = PageBatchExtractor::default();
        assert!(!extractor.is_header("first name last name"));
        assert!(extractor.is_header("  First Name  "));
    }

    #[test]
    fn test_empty_page() {
        let extractor = PageBatchExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("\n\n  \n").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let page = "Kobe Bryant 1978-08-23 Los Angeles Lakers Yes No\n\
                    garbage line\n\
                    Tim Duncan 1976-04-25 San Antonio Spurs Yes No\n\
                    Dirk Nowitzki 1978-06-19 Dallas Mavericks Yes No";
        let names: Vec<_> = PageBatchExtractor::default()
            .extract(page)
            .into_iter()
            .map(|r| r.last_name)
            .collect();

        assert_eq!(names, vec!["Bryant", "Duncan", "Nowitzki"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let page = "Kobe Bryant 1978-08-23 Lakers Yes No\r\nTim Duncan 1976-04-25 Spurs Yes No\r\n";
        let records = PageBatchExtractor::default().extract(page);

        assert_eq!(records.len(), 2);
        assert!(!records[0].injured);
    }

    #[test]
    fn test_rejections_reported_with_line_numbers() {
        let page = [HEADER, LEBRON, MAGIC, "", "Page 1 of 2"].join("\n");
        let extraction = PageBatchExtractor::default().extract_report(&page);

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.headers_skipped, 1);
        assert_eq!(
            extraction.rejected,
            vec![
                RejectedLine {
                    line_number: 3,
                    text: MAGIC.to_string(),
                    reason: NoMatchReason::InsufficientNameTokens,
                },
                RejectedLine {
                    line_number: 5,
                    text: "Page 1 of 2".to_string(),
                    reason: NoMatchReason::NoDateFound,
                },
            ]
        );
    }

    #[test]
    fn test_one_good_line_among_many_bad() {
        let mut lines = vec!["not a player"; 50];
        lines.insert(17, LEBRON);
        let page = lines.join("\n");

        let extraction = PageBatchExtractor::default().extract_report(&page);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.rejected.len(), 50);
    }

    #[test]
    fn test_custom_header_markers() {
        let config = ExtractorConfig {
            header_markers: vec!["Roster".to_string()],
            ..Default::default()
        };
        let extractor = PageBatchExtractor::new(&config);
        let page = format!("Lakers Roster 2024-01-01 as of today\n{}\n{}", HEADER, LEBRON);

        let extraction = extractor.extract_report(&page);
        assert_eq!(extraction.headers_skipped, 1);
        // The default header row is just a rejected line here
        assert_eq!(extraction.rejected.len(), 1);
        assert_eq!(extraction.records.len(), 1);
    }
}
