/// boardrank-core: Pure leaderboard validation and ranking.
///
/// Raw score records → validated entries → dense 1-indexed ranks within a
/// (board size, difficulty) partition. No IO, no state, no clock — just a
/// deterministic transformation over the batch the caller hands in.
///
/// Records only compete inside their own partition; feeding a mixed batch
/// to the ranker is a caller error. Ties in time taken go to the player who
/// posted the time first.
///
/// # Quick start
///
/// ```rust
/// use boardrank_core::{assign_ranks, validate, LeaderboardRecord};
///
/// let records = vec![
///     LeaderboardRecord {
///         rank: None,
///         player_name: "Ying".into(),
///         board_size: 4,
///         difficulty: "hard".into(),
///         time_taken: 95.0,
///         timestamp: "2024-03-01 18:02:45".into(),
///         moves: Some(31),
///     },
///     LeaderboardRecord {
///         rank: None,
///         player_name: "Mo".into(),
///         board_size: 4,
///         difficulty: "困难模式".into(), // same category as "hard"
///         time_taken: 120.0,
///         timestamp: "2024-03-01T18:05:02Z".into(),
///         moves: None,
///     },
/// ];
///
/// let entries: Vec<_> = records.iter().map(validate).collect::<Result<_, _>>()?;
/// let ranked = assign_ranks(&entries)?;
///
/// assert_eq!(ranked[0].rank, 1);
/// assert_eq!(ranked[0].entry.player_name, "Ying");
/// # Ok::<(), boardrank_core::LeaderboardError>(())
/// ```

pub mod constants;
pub mod error;
pub mod ranking;
pub mod types;
pub mod validate;

// Re-export primary public API at crate root.
pub use error::LeaderboardError;
pub use ranking::{assign_ranks, group_by_partition, merge_personal_best, top_n};
pub use types::{Difficulty, LeaderboardRecord, Partition, RankedEntry, ScoreEntry};
pub use validate::validate;
