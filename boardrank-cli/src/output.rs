/// Output formatting: terminal table and JSON.
use boardrank_core::{LeaderboardRecord, Partition, RankedEntry};
use serde::Serialize;

#[derive(Serialize)]
struct JsonBoard {
    board_size: u32,
    difficulty: String,
    records: Vec<LeaderboardRecord>,
}

/// Print one padded table per leaderboard partition.
pub fn print_tables(boards: &[(Partition, Vec<RankedEntry>)]) {
    for (i, (partition, ranked)) in boards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{partition}");

        // Find the widest player name for padding
        let name_width = ranked
            .iter()
            .map(|r| r.entry.player_name.len())
            .max()
            .unwrap_or(6)
            .max(6); // at least "Player"

        println!("  # | {:<name_width$} |  Time | {:<19} | Moves", "Player", "Date");
        println!("----|-{}-|-------|-{}-|------", "-".repeat(name_width), "-".repeat(19));

        for r in ranked {
            let moves = r
                .entry
                .moves
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>3} | {:<name_width$} | {:>5} | {} | {:>5}",
                r.rank,
                r.entry.player_name,
                r.entry.formatted_time(),
                r.entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                moves,
            );
        }
    }
}

/// Print all ranked leaderboards as JSON.
pub fn print_json(boards: &[(Partition, Vec<RankedEntry>)]) {
    let boards: Vec<JsonBoard> = boards
        .iter()
        .map(|(partition, ranked)| JsonBoard {
            board_size: partition.board_size,
            difficulty: partition.difficulty.to_string(),
            records: ranked.iter().map(RankedEntry::to_record).collect(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&boards).unwrap());
}
