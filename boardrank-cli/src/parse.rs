/// Input decoding: a JSON array of records or JSON Lines, autodetected.
use boardrank_core::LeaderboardRecord;

/// Parse record input. A leading '[' means one JSON array; anything else
/// is treated as JSON Lines, one record per non-empty line.
pub fn parse_records(content: &str) -> Result<Vec<LeaderboardRecord>, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse JSON array: {e}"))
    } else {
        trimmed
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| {
                serde_json::from_str(line.trim())
                    .map_err(|e| format!("Failed to parse record on line {}: {e}", number + 1))
            })
            .collect()
    }
}
