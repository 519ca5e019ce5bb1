//! Player module - the record the roster pipeline produces

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team name used when a line yields no team tokens
pub const UNKNOWN_TEAM: &str = "Unknown";

/// Identifier assigned by a repository when a player is stored
///
/// Records coming out of the parser have no identity; the id only exists
/// once a repository has persisted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Create a PlayerId from a raw storage key
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_domain::PlayerId;
    ///
    /// let id = PlayerId::from_value(7);
    /// assert_eq!(id.value(), 7);
    /// ```
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw storage key
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player recovered from one roster line
///
/// Records are immutable values: the parser builds one only after every
/// field has been recovered, and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// First name (first token of the name segment)
    pub first_name: String,

    /// Last name (second token of the name segment)
    pub last_name: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Team name, single-space joined
    pub team: String,

    /// Whether the player is retired
    pub retired: bool,

    /// Whether the player is injured
    pub injured: bool,
}

impl PlayerRecord {
    /// Create a new player record
    ///
    /// An empty `team` is replaced by [`UNKNOWN_TEAM`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        team: impl Into<String>,
        retired: bool,
        injured: bool,
    ) -> Self {
        let team = team.into();
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            team: if team.is_empty() {
                UNKNOWN_TEAM.to_string()
            } else {
                team
            },
            retired,
            injured,
        }
    }

    /// Full display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A player as held by a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlayer {
    /// Repository-assigned identifier
    pub id: PlayerId,

    /// The stored record
    #[serde(flatten)]
    pub record: PlayerRecord,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: PlayerId ordering matches i64 ordering
        #[test]
        fn test_player_id_ordering_property(a: i64, b: i64) {
            let id_a = PlayerId::from_value(a);
            let id_b = PlayerId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: the team of a constructed record is never empty
        #[test]
        fn test_team_never_empty(team in "[A-Za-z ]{0,12}") {
            let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
            let record = PlayerRecord::new("A", "B", dob, team, false, false);
            prop_assert!(!record.team.is_empty());
        }
    }
}
