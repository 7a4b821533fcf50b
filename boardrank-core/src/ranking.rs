/// Dense ranking within a single leaderboard partition.
///
/// Pure functions over slices — no IO, no state, no clock. Callers own
/// validation (see [`validate`](crate::validate::validate)) and decide
/// what happens to an invalid batch.
use std::collections::BTreeMap;

use crate::error::LeaderboardError;
use crate::types::{Partition, RankedEntry, ScoreEntry};

/// Rank one homogeneous batch.
///
/// Sorts ascending by time taken, breaks ties by earlier timestamp, keeps
/// input order for exact ties (stable sort), and assigns dense 1-indexed
/// ranks — tied times still get distinct consecutive ranks. Fails with
/// [`LeaderboardError::MixedPartition`] when the batch spans more than one
/// (board size, difficulty) bucket. Never mutates its input; the same
/// input always produces the same output.
pub fn assign_ranks(entries: &[ScoreEntry]) -> Result<Vec<RankedEntry>, LeaderboardError> {
    if let Some(first) = entries.first() {
        let partition = first.partition();
        for entry in &entries[1..] {
            if entry.partition() != partition {
                return Err(LeaderboardError::MixedPartition(partition, entry.partition()));
            }
        }
    }

    let mut ordered: Vec<ScoreEntry> = entries.to_vec();
    // time_taken is finite for validated entries, so total_cmp agrees with
    // the numeric order.
    ordered.sort_by(|a, b| {
        a.time_taken
            .total_cmp(&b.time_taken)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });

    Ok(ordered
        .into_iter()
        .enumerate()
        .map(|(position, entry)| RankedEntry { rank: position as u32 + 1, entry })
        .collect())
}

/// Split a heterogeneous batch into homogeneous partitions.
///
/// Input order is preserved within each partition, so the stable tie-break
/// in [`assign_ranks`] sees entries in the order they arrived.
pub fn group_by_partition(entries: &[ScoreEntry]) -> BTreeMap<Partition, Vec<ScoreEntry>> {
    let mut partitions: BTreeMap<Partition, Vec<ScoreEntry>> = BTreeMap::new();
    for entry in entries {
        partitions.entry(entry.partition()).or_default().push(entry.clone());
    }
    partitions
}

/// Collapse a partition to one entry per player: the lowest time, ties
/// broken by earlier timestamp. Survivors keep input order.
pub fn merge_personal_best(entries: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut best: Vec<ScoreEntry> = Vec::new();
    for entry in entries {
        match best.iter_mut().find(|b| b.player_name == entry.player_name) {
            Some(existing) => {
                let improves = entry
                    .time_taken
                    .total_cmp(&existing.time_taken)
                    .then_with(|| entry.timestamp.cmp(&existing.timestamp))
                    .is_lt();
                if improves {
                    *existing = entry.clone();
                }
            }
            None => best.push(entry.clone()),
        }
    }
    best
}

/// Leading slice of an already ranked sequence.
pub fn top_n(ranked: &[RankedEntry], n: usize) -> &[RankedEntry] {
    &ranked[..ranked.len().min(n)]
}
