//! Field segmentation rules used by the line parser
//!
//! Roster lines have no delimiters between fields, so the parser relies on a
//! handful of positional rules. Each one lives here on its own.

use crate::config::NamePolicy;
use chrono::{Datelike, NaiveDate};
use regex::{Match, Regex};
use std::sync::LazyLock;

/// `YYYY-MM-DD` shaped run of ASCII digits; no word boundaries
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tokens needed in front of the date
pub const MIN_NAME_TOKENS: usize = 2;

/// Tokens needed after the date: at least one team word plus two status markers
pub const MIN_TAIL_TOKENS: usize = 3;

/// First date-shaped run in a line; the pivot for every other field
pub fn find_date(line: &str) -> Option<Match<'_>> {
    DATE_SHAPE.find(line)
}

/// Strict calendar parse of date-shaped text
///
/// Rejects impossible dates such as `2024-13-40` and year `0000`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Parse text that is exactly one `YYYY-MM-DD` date and nothing else
pub fn parse_exact_date(text: &str) -> Option<NaiveDate> {
    find_date(text)
        .filter(|m| m.start() == 0 && m.end() == text.len())
        .and_then(|m| parse_date(m.as_str()))
}

/// Split a segment on runs of whitespace, dropping empty tokens
pub fn tokenize(segment: &str) -> Vec<&str> {
    segment.split_whitespace().collect()
}

/// First and last name recovered from the name segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    /// First name
    pub first: String,
    /// Last name
    pub last: String,
    /// Tokens the policy did not use
    pub discarded: Vec<String>,
}

impl NamePolicy {
    /// Apply the policy to the tokens in front of the date
    ///
    /// Returns `None` with fewer than [`MIN_NAME_TOKENS`] tokens.
    pub fn split(&self, tokens: &[&str]) -> Option<NameParts> {
        if tokens.len() < MIN_NAME_TOKENS {
            return None;
        }

        let parts = match self {
            NamePolicy::FirstTwo => NameParts {
                first: tokens[0].to_string(),
                last: tokens[1].to_string(),
                discarded: tokens[2..].iter().map(|t| t.to_string()).collect(),
            },
            NamePolicy::FirstAndRest => NameParts {
                first: tokens[0].to_string(),
                last: tokens[1..].join(" "),
                discarded: Vec::new(),
            },
        };
        Some(parts)
    }
}

/// Team tokens and the two trailing status markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailParts<'a> {
    /// Team name tokens
    pub team: Vec<&'a str>,
    /// Raw retired marker
    pub retired: &'a str,
    /// Raw injured marker
    pub injured: &'a str,
}

/// Split the tokens after the date: the last two are status markers
///
/// Returns `None` with fewer than [`MIN_TAIL_TOKENS`] tokens.
pub fn split_tail<'a>(tokens: &[&'a str]) -> Option<TailParts<'a>> {
    if tokens.len() < MIN_TAIL_TOKENS {
        return None;
    }

    let (team, status) = tokens.split_at(tokens.len() - 2);
    Some(TailParts {
        team: team.to_vec(),
        retired: status[0],
        injured: status[1],
    })
}

/// The set of status tokens read as `true`
///
/// Membership is trimmed and case-insensitive. Anything outside the set,
/// including an explicit "no", reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthyTokens {
    tokens: Vec<String>,
}

impl TruthyTokens {
    /// Build the set from configured tokens
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Coerce a status token to a boolean
    pub fn is_truthy(&self, token: &str) -> bool {
        let token = token.trim().to_lowercase();
        self.tokens.iter().any(|t| *t == token)
    }
}

impl Default for TruthyTokens {
    fn default() -> Self {
        Self::new(["true", "yes", "1", "retired", "injured"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_date_first_match() {
        let m = find_date("Born 1984-12-30, drafted 2003-06-26").unwrap();
        assert_eq!(m.as_str(), "1984-12-30");
        assert!(find_date("1984/12/30").is_none());
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(parse_date("1956-12-07"), NaiveDate::from_ymd_opt(1956, 12, 7));
        assert_eq!(parse_date("0001-01-01"), NaiveDate::from_ymd_opt(1, 1, 1));
        for bad in ["0000-01-01", "2024-13-40", "2023-02-29", "1956-00-10"] {
            assert!(parse_date(bad).is_none(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_parse_exact_date() {
        assert!(parse_exact_date("1956-12-07").is_some());
        for bad in ["1956-2-7", "56-12-07", " 1956-12-07", "1956-12-07x", "11956-12-07", "0000-01-01"] {
            assert!(parse_exact_date(bad).is_none(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  Los   Angeles\tLakers "), vec!["Los", "Angeles", "Lakers"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_first_two_drops_extra_tokens() {
        let parts = NamePolicy::FirstTwo
            .split(&["Ken", "Griffey", "Jr."])
            .unwrap();
        assert_eq!(parts.first, "Ken");
        assert_eq!(parts.last, "Griffey");
        assert_eq!(parts.discarded, vec!["Jr."]);
    }

    #[test]
    fn test_first_and_rest_keeps_extra_tokens() {
        let parts = NamePolicy::FirstAndRest
            .split(&["Ken", "Griffey", "Jr."])
            .unwrap();
        assert_eq!(parts.last, "Griffey Jr.");
        assert!(parts.discarded.is_empty());
    }

    #[test]
    fn test_single_name_token_rejected() {
        assert!(NamePolicy::FirstTwo.split(&["Magic"]).is_none());
        assert!(NamePolicy::FirstAndRest.split(&[]).is_none());
    }

    #[test]
    fn test_split_tail_minimum() {
        let parts = split_tail(&["Lakers", "Yes", "No"]).unwrap();
        assert_eq!(parts.team, vec!["Lakers"]);
        assert_eq!(parts.retired, "Yes");
        assert_eq!(parts.injured, "No");

        assert!(split_tail(&["Yes", "No"]).is_none());
    }

    #[test]
    fn test_split_tail_multi_word_team() {
        let parts = split_tail(&["Los", "Angeles", "Lakers", "No", "Yes"]).unwrap();
        assert_eq!(parts.team.join(" "), "Los Angeles Lakers");
        assert_eq!(parts.injured, "Yes");
    }

    #[test]
    fn test_truthy_tokens() {
        let truthy = TruthyTokens::default();
        for token in ["true", "YES", " 1 ", "Retired", "INJURED"] {
            assert!(truthy.is_truthy(token), "{} should be truthy", token);
        }
        for token in ["no", "false", "0", "Yse", ""] {
            assert!(!truthy.is_truthy(token), "{} should be falsy", token);
        }
    }

    #[test]
    fn test_custom_truthy_tokens() {
        let truthy = TruthyTokens::new(["Y"]);
        assert!(truthy.is_truthy("y"));
        assert!(!truthy.is_truthy("yes"));
    }
}
