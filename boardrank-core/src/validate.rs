/// Field validation for incoming leaderboard records.
///
/// Checks run in a fixed order so a record with several faults always
/// reports the same error: player name, board size, difficulty, time
/// taken, move count, timestamp.
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::constants::LEGACY_TIMESTAMP_FORMAT;
use crate::error::LeaderboardError;
use crate::types::{Difficulty, LeaderboardRecord, ScoreEntry};

/// Validate one record into a typed [`ScoreEntry`].
///
/// Any caller-supplied `rank` is discarded — ranks only ever come from
/// [`assign_ranks`](crate::ranking::assign_ranks).
pub fn validate(record: &LeaderboardRecord) -> Result<ScoreEntry, LeaderboardError> {
    let player_name = record.player_name.trim();
    if player_name.is_empty() {
        return Err(LeaderboardError::EmptyPlayerName);
    }

    let board_size = match u32::try_from(record.board_size) {
        Ok(n) if n > 0 => n,
        _ => return Err(LeaderboardError::InvalidBoardSize(record.board_size)),
    };

    let difficulty = Difficulty::from_label(&record.difficulty)?;

    if !record.time_taken.is_finite() || record.time_taken < 0.0 {
        return Err(LeaderboardError::InvalidTimeTaken(record.time_taken));
    }

    let moves = match record.moves {
        None => None,
        Some(m) => match u32::try_from(m) {
            Ok(m) => Some(m),
            Err(_) => return Err(LeaderboardError::InvalidMoveCount(m)),
        },
    };

    let timestamp = parse_timestamp(&record.timestamp)?;

    Ok(ScoreEntry {
        player_name: player_name.to_string(),
        board_size,
        difficulty,
        time_taken: record.time_taken,
        timestamp,
        moves,
    })
}

/// Parse a timestamp in RFC 3339 or the recorder's legacy layout.
/// The legacy layout carries no offset and is interpreted as UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, LeaderboardError> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, LEGACY_TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }
    Err(LeaderboardError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> LeaderboardRecord {
        LeaderboardRecord {
            rank: None,
            player_name: "Ying".to_string(),
            board_size: 4,
            difficulty: "hard".to_string(),
            time_taken: 95.0,
            timestamp: "2024-03-01T18:02:45Z".to_string(),
            moves: Some(31),
        }
    }

    #[test]
    fn test_valid_record() {
        let entry = validate(&record()).unwrap();
        assert_eq!(entry.player_name, "Ying");
        assert_eq!(entry.board_size, 4);
        assert_eq!(entry.difficulty, Difficulty::Hard);
        assert_eq!(entry.time_taken, 95.0);
        assert_eq!(entry.moves, Some(31));
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 18, 2, 45).unwrap()
        );
    }

    #[test]
    fn test_whitespace_only_name() {
        let input = LeaderboardRecord { player_name: "   ".to_string(), ..record() };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::EmptyPlayerName);
    }

    #[test]
    fn test_name_is_trimmed() {
        let input = LeaderboardRecord { player_name: "  Mo  ".to_string(), ..record() };
        assert_eq!(validate(&input).unwrap().player_name, "Mo");
    }

    #[test]
    fn test_zero_and_negative_board_size() {
        let input = LeaderboardRecord { board_size: 0, ..record() };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidBoardSize(0));

        let input = LeaderboardRecord { board_size: -4, ..record() };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidBoardSize(-4));
    }

    #[test]
    fn test_unknown_difficulty() {
        let input = LeaderboardRecord { difficulty: "extreme".to_string(), ..record() };
        assert_eq!(
            validate(&input).unwrap_err(),
            LeaderboardError::InvalidDifficulty("extreme".to_string())
        );
    }

    #[test]
    fn test_bad_time_taken() {
        let input = LeaderboardRecord { time_taken: -1.0, ..record() };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidTimeTaken(-1.0));

        let input = LeaderboardRecord { time_taken: f64::NAN, ..record() };
        assert!(matches!(
            validate(&input).unwrap_err(),
            LeaderboardError::InvalidTimeTaken(t) if t.is_nan()
        ));

        let input = LeaderboardRecord { time_taken: f64::INFINITY, ..record() };
        assert!(matches!(
            validate(&input).unwrap_err(),
            LeaderboardError::InvalidTimeTaken(_)
        ));
    }

    #[test]
    fn test_zero_time_is_valid() {
        let input = LeaderboardRecord { time_taken: 0.0, ..record() };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_negative_moves() {
        let input = LeaderboardRecord { moves: Some(-1), ..record() };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidMoveCount(-1));
    }

    #[test]
    fn test_missing_moves_is_valid() {
        let input = LeaderboardRecord { moves: None, ..record() };
        assert_eq!(validate(&input).unwrap().moves, None);
    }

    #[test]
    fn test_legacy_timestamp_layout() {
        let input = LeaderboardRecord {
            timestamp: "2024-03-01 18:02:45".to_string(),
            ..record()
        };
        let entry = validate(&input).unwrap();
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 18, 2, 45).unwrap()
        );
    }

    #[test]
    fn test_unparseable_timestamp() {
        let input = LeaderboardRecord { timestamp: "yesterday".to_string(), ..record() };
        assert_eq!(
            validate(&input).unwrap_err(),
            LeaderboardError::InvalidTimestamp("yesterday".to_string())
        );
    }

    #[test]
    fn test_supplied_rank_is_discarded() {
        // Rank is output-only: a pre-filled value must not survive validation.
        let input = LeaderboardRecord { rank: Some(1), ..record() };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_error_priority_order() {
        // Name check fires before the board size check...
        let input = LeaderboardRecord {
            player_name: " ".to_string(),
            board_size: -1,
            ..record()
        };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::EmptyPlayerName);

        // ...board size before difficulty...
        let input = LeaderboardRecord {
            board_size: -1,
            difficulty: "extreme".to_string(),
            ..record()
        };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidBoardSize(-1));

        // ...difficulty before time taken...
        let input = LeaderboardRecord {
            difficulty: "extreme".to_string(),
            time_taken: -5.0,
            ..record()
        };
        assert!(matches!(
            validate(&input).unwrap_err(),
            LeaderboardError::InvalidDifficulty(_)
        ));

        // ...time taken before moves, and moves before the timestamp.
        let input = LeaderboardRecord {
            time_taken: -5.0,
            moves: Some(-1),
            timestamp: "bad".to_string(),
            ..record()
        };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidTimeTaken(-5.0));

        let input = LeaderboardRecord {
            moves: Some(-1),
            timestamp: "bad".to_string(),
            ..record()
        };
        assert_eq!(validate(&input).unwrap_err(), LeaderboardError::InvalidMoveCount(-1));
    }
}
