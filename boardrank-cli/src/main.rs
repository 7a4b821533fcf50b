mod config;
mod output;
mod parse;

use boardrank_core::constants::DEFAULT_LEADERBOARD_LIMIT;
use boardrank_core::{
    assign_ranks, group_by_partition, merge_personal_best, top_n, validate, Difficulty,
    LeaderboardRecord, Partition, RankedEntry, ScoreEntry,
};
use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "boardrank", version, about = "Validate and rank puzzle leaderboard records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank a batch of leaderboard records
    Rank(RankArgs),
    /// Create a default config file at ~/.config/boardrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with records as a JSON array or JSON Lines (stdin if omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Only rank records with this board size
    #[arg(long)]
    board_size: Option<u32>,

    /// Only rank records with this difficulty (either spelling)
    #[arg(long)]
    difficulty: Option<String>,

    /// Rows to show per leaderboard (default 10)
    #[arg(long)]
    limit: Option<usize>,

    /// Keep only each player's best time per leaderboard
    #[arg(long)]
    best_only: bool,

    /// Drop invalid records instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Path to config file (default: ~/.config/boardrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default limit and output format.");
        }
    }
}

/// Load records from --input or stdin.
fn load_records(args: &RankArgs) -> Vec<LeaderboardRecord> {
    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read {}: {e}", path.display()))),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No records provided. Use --input <file> or pipe JSON via stdin.");
            }
            let mut content = String::new();
            stdin
                .lock()
                .read_to_string(&mut content)
                .unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}")));
            content
        }
    };
    parse::parse_records(&content).unwrap_or_else(|e| bail(e))
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let limit = args.limit.or(cfg.limit).unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    let skip_invalid = args.skip_invalid || cfg.skip_invalid.unwrap_or(false);
    let json = args.json || cfg.json.unwrap_or(false);

    let difficulty_filter = args
        .difficulty
        .as_deref()
        .map(|label| Difficulty::from_label(label).unwrap_or_else(|e| bail(e)));

    let records = load_records(&args);
    if records.is_empty() {
        bail("No records to rank.");
    }

    // Validate, honoring the skip-or-abort policy.
    let mut entries: Vec<ScoreEntry> = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for (index, record) in records.iter().enumerate() {
        match validate(record) {
            Ok(entry) => entries.push(entry),
            Err(e) if skip_invalid => {
                skipped += 1;
                warn!(index, player = %record.player_name, error = %e, "Skipping invalid record");
            }
            Err(e) => bail(format!("Record {index} is invalid: {e}")),
        }
    }
    if skipped > 0 {
        info!(total = records.len(), skipped, "Validation dropped invalid records");
    }

    entries.retain(|entry| {
        args.board_size.map_or(true, |size| entry.board_size == size)
            && difficulty_filter.map_or(true, |d| entry.difficulty == d)
    });
    if entries.is_empty() {
        bail("No records match the requested leaderboard.");
    }

    // Rank each (board size, difficulty) bucket on its own.
    let mut boards: Vec<(Partition, Vec<RankedEntry>)> = Vec::new();
    for (partition, group) in group_by_partition(&entries) {
        let group = if args.best_only {
            merge_personal_best(&group)
        } else {
            group
        };
        let ranked = assign_ranks(&group).unwrap_or_else(|e| bail(e));
        boards.push((partition, top_n(&ranked, limit).to_vec()));
    }

    if json {
        output::print_json(&boards);
    } else {
        output::print_tables(&boards);
    }
}
