use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::LeaderboardError;

/// Canonical difficulty categories.
///
/// Each category has two surface spellings that denote the same bucket:
/// the base spelling used by the score recorder and the localized spelling
/// shown in the game's menus. Both normalize to one variant here, so records
/// from either source land on the same leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Normalize either spelling of a difficulty label.
    ///
    /// Base spellings match case-insensitively after trimming. Localized
    /// spellings are fixed menu strings and match exactly.
    pub fn from_label(label: &str) -> Result<Self, LeaderboardError> {
        let trimmed = label.trim();
        match trimmed {
            "简单模式" => return Ok(Difficulty::Easy),
            "中等模式" => return Ok(Difficulty::Medium),
            "困难模式" => return Ok(Difficulty::Hard),
            _ => {}
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(LeaderboardError::InvalidDifficulty(label.to_string())),
        }
    }

    /// The base spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The localized spelling.
    pub fn localized_label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单模式",
            Difficulty::Medium => "中等模式",
            Difficulty::Hard => "困难模式",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaderboard record as it arrives from (and returns to) the outside:
/// the session recorder, stored score files, the display layer.
///
/// Fields are loosely typed on purpose — input is untrusted until
/// [`validate`](crate::validate::validate) has turned it into a
/// [`ScoreEntry`]. `rank` is output-only: whatever a caller supplies is
/// ignored and recomputed by [`assign_ranks`](crate::ranking::assign_ranks).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LeaderboardRecord {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rank: Option<u32>,
    pub player_name: String,
    pub board_size: i64,
    /// Raw difficulty label, either spelling.
    pub difficulty: String,
    /// Completion time in seconds.
    pub time_taken: f64,
    /// RFC 3339, or the recorder's legacy "%Y-%m-%d %H:%M:%S" layout.
    pub timestamp: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub moves: Option<i64>,
}

/// Key identifying one leaderboard: records only compete against records
/// with the same board size and difficulty category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition {
    pub board_size: u32,
    pub difficulty: Difficulty,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.board_size, self.board_size, self.difficulty)
    }
}

/// A validated score: trimmed name, typed fields, parsed timestamp.
///
/// Produced by [`validate`](crate::validate::validate). Immutable value
/// type — ranking never mutates entries, it returns new ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub player_name: String,
    pub board_size: u32,
    pub difficulty: Difficulty,
    /// Completion time in seconds. Guaranteed finite and non-negative.
    pub time_taken: f64,
    /// Tie-breaker and audit field, never the primary ranking key.
    pub timestamp: DateTime<Utc>,
    pub moves: Option<u32>,
}

impl ScoreEntry {
    /// The (board size, difficulty) bucket this entry competes in.
    pub fn partition(&self) -> Partition {
        Partition {
            board_size: self.board_size,
            difficulty: self.difficulty,
        }
    }

    /// Completion time as `m:ss`, whole seconds.
    pub fn formatted_time(&self) -> String {
        let secs = self.time_taken as u64;
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

/// A score entry with its engine-assigned dense rank (1-indexed).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub rank: u32,
    pub entry: ScoreEntry,
}

impl RankedEntry {
    /// Convert back to the wire shape with `rank` populated. The difficulty
    /// is emitted in its base spelling and the timestamp as RFC 3339.
    pub fn to_record(&self) -> LeaderboardRecord {
        LeaderboardRecord {
            rank: Some(self.rank),
            player_name: self.entry.player_name.clone(),
            board_size: i64::from(self.entry.board_size),
            difficulty: self.entry.difficulty.as_str().to_string(),
            time_taken: self.entry.time_taken,
            timestamp: self
                .entry
                .timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            moves: self.entry.moves.map(i64::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_difficulty_both_spellings() {
        assert_eq!(Difficulty::from_label("hard").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("困难模式").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("简单模式").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("medium").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("中等模式").unwrap(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_case_and_whitespace() {
        assert_eq!(Difficulty::from_label(" Hard ").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("EASY").unwrap(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_unknown_label() {
        let err = Difficulty::from_label("nightmare").unwrap_err();
        assert_eq!(err, LeaderboardError::InvalidDifficulty("nightmare".to_string()));
    }

    #[test]
    fn test_formatted_time() {
        let entry = ScoreEntry {
            player_name: "A".to_string(),
            board_size: 4,
            difficulty: Difficulty::Easy,
            time_taken: 125.7,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 18, 2, 45).unwrap(),
            moves: None,
        };
        assert_eq!(entry.formatted_time(), "2:05");

        let quick = ScoreEntry { time_taken: 59.0, ..entry };
        assert_eq!(quick.formatted_time(), "0:59");
    }

    #[test]
    fn test_partition_display() {
        let partition = Partition { board_size: 4, difficulty: Difficulty::Hard };
        assert_eq!(partition.to_string(), "4x4 hard");
    }

    #[test]
    fn test_to_record_populates_rank() {
        let ranked = RankedEntry {
            rank: 3,
            entry: ScoreEntry {
                player_name: "Mo".to_string(),
                board_size: 5,
                difficulty: Difficulty::Medium,
                time_taken: 80.0,
                timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 18, 2, 45).unwrap(),
                moves: Some(40),
            },
        };
        let record = ranked.to_record();
        assert_eq!(record.rank, Some(3));
        assert_eq!(record.board_size, 5);
        assert_eq!(record.difficulty, "medium");
        assert_eq!(record.timestamp, "2024-03-01T18:02:45Z");
        assert_eq!(record.moves, Some(40));
    }
}
