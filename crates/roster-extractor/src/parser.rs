//! Parse one line of page text into a player record

use crate::config::{ExtractorConfig, NamePolicy};
use crate::rules::{find_date, parse_date, split_tail, tokenize, TruthyTokens};
use crate::types::{NoMatch, NoMatchReason, ParsedLine, StatusTokens};
use roster_domain::{PlayerRecord, UNKNOWN_TEAM};
use tracing::debug;

/// Turns a roster line into a [`PlayerRecord`]
///
/// Expected shape: `First Last YYYY-MM-DD Team Words... Retired Injured`,
/// with any amount of whitespace between fields. Lines that don't fit come
/// back as [`NoMatch`]; the parser never panics on input text.
#[derive(Debug, Clone)]
pub struct LineRecordParser {
    name_policy: NamePolicy,
    truthy: TruthyTokens,
    default_team: String,
}

impl LineRecordParser {
    /// Create a parser from configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            name_policy: config.name_policy,
            truthy: TruthyTokens::new(&config.truthy_tokens),
            default_team: config.default_team.clone(),
        }
    }

    /// Parse a line
    pub fn parse(&self, line: &str) -> Result<ParsedLine, NoMatch> {
        let reject = |reason: NoMatchReason| {
            debug!("Rejected line ({}): {}", reason, line);
            NoMatch::new(reason, line)
        };

        let anchor = find_date(line)
            .ok_or_else(|| reject(NoMatchReason::NoDateFound))?;

        let name_tokens = tokenize(&line[..anchor.start()]);
        let name = self
            .name_policy
            .split(&name_tokens)
            .ok_or_else(|| reject(NoMatchReason::InsufficientNameTokens))?;

        let tail_tokens = tokenize(&line[anchor.end()..]);
        let tail = split_tail(&tail_tokens)
            .ok_or_else(|| reject(NoMatchReason::InsufficientTailTokens))?;

        let date_of_birth = parse_date(anchor.as_str())
            .ok_or_else(|| reject(NoMatchReason::InvalidDateFormat))?;

        let retired = self.truthy.is_truthy(tail.retired);
        let injured = self.truthy.is_truthy(tail.injured);

        let mut team = tail.team.join(" ");
        if team.is_empty() {
            team = self.default_team.clone();
        }

        debug!(
            "Parsed: {} {}, {}, {}, Retired: {}, Injured: {}",
            name.first, name.last, date_of_birth, team, tail.retired, tail.injured
        );

        Ok(ParsedLine {
            record: PlayerRecord {
                first_name: name.first,
                last_name: name.last,
                date_of_birth,
                team,
                retired,
                injured,
            },
            status_tokens: StatusTokens {
                retired: tail.retired.to_string(),
                injured: tail.injured.to_string(),
            },
            discarded_name_tokens: name.discarded,
        })
    }

    /// Parse a line, keeping only the record
    pub fn parse_record(&self, line: &str) -> Option<PlayerRecord> {
        self.parse(line).ok().map(|parsed| parsed.record)
    }
}

impl Default for LineRecordParser {
    fn default() -> Self {
        Self {
            name_policy: NamePolicy::default(),
            truthy: TruthyTokens::default(),
            default_team: UNKNOWN_TEAM.to_string(),
        }
    }
}
