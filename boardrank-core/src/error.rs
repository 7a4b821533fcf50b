/// Error taxonomy for validation and ranking.
///
/// Every variant is a caller/data error — nothing here is environmental,
/// nothing is retryable, and nothing is fatal to the process. The caller
/// decides whether a bad record is dropped or aborts the batch.
use thiserror::Error;

use crate::types::Partition;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeaderboardError {
    #[error("player name is empty")]
    EmptyPlayerName,

    #[error("board size must be a positive integer, got {0}")]
    InvalidBoardSize(i64),

    #[error("unknown difficulty label {0:?}")]
    InvalidDifficulty(String),

    #[error("time taken must be finite and non-negative, got {0}")]
    InvalidTimeTaken(f64),

    #[error("move count must be non-negative, got {0}")]
    InvalidMoveCount(i64),

    #[error("timestamp {0:?} is not a valid instant")]
    InvalidTimestamp(String),

    #[error("records mix leaderboard partitions: {0} and {1}")]
    MixedPartition(Partition, Partition),
}
