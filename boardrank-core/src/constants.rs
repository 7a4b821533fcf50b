/// Number of rows a leaderboard shows by default.
/// The game's leaderboard screen only ever displays the top 10.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Timestamp layout produced by the original score recorder,
/// e.g. "2024-03-01 18:02:45". Accepted alongside RFC 3339 and
/// interpreted as UTC since the recorder stores no offset.
pub const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
