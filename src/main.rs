//! Command line entry point for the mus tournament tracker
//!
//! Thin presentation layer: parses arguments, loads configuration, builds
//! the manager over the file-backed store and prints plain-text tables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mus_tracker::config::AppConfig;
use mus_tracker::error::TrackerError;
use mus_tracker::standings::DEFAULT_SUMMARY_SIZE;
use mus_tracker::store::JsonFileStore;
use mus_tracker::tracker::{DeletionGate, TrackerManager};
use mus_tracker::types::{Match, MatchId, Player, PlayerId, MATCH_PLAYERS};
use mus_tracker::utils::format_match_date;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Mus Tracker - local 2v2 tournament tracking
#[derive(Parser)]
#[command(
    name = "mus-tracker",
    version,
    about = "Local tournament tracker for 2v2 mus card game matches",
    long_about = "Records players and 2v2 match outcomes in a local JSON data \
                  directory and derives rankings from match history. Deletions \
                  are confirmed with a shared code."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, value_name = "DIR", help = "Override the data directory")]
    data_dir: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show top players and recent matches
    Summary,
    /// Show the full ranking table
    Ranking,
    /// List registered players with their cached counters
    Players,
    /// Register a new player
    AddPlayer {
        /// Player name (leading/trailing whitespace is trimmed)
        name: String,
    },
    /// List recorded matches, newest first
    Matches,
    /// Record a finished match; the first two ids form team 1
    Record {
        /// Exactly four player ids
        #[arg(num_args = 4, value_name = "PLAYER_ID")]
        players: Vec<PlayerId>,
        /// Team 1 score
        #[arg(long)]
        score1: u32,
        /// Team 2 score
        #[arg(long)]
        score2: u32,
    },
    /// Delete a recorded match (requires the deletion code)
    DeleteMatch {
        id: MatchId,
        #[arg(long, value_name = "CODE")]
        code: String,
    },
    /// Delete a player and every match referencing them (requires the
    /// deletion code)
    DeletePlayer {
        id: PlayerId,
        #[arg(long, value_name = "CODE")]
        code: String,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(data_dir) = &args.data_dir {
        config.storage.data_dir = data_dir.clone();
    }

    Ok(config)
}

fn format_match_line(players: &[Player], m: &Match) -> String {
    let name = |id: &PlayerId| TrackerManager::player_name(players, id);
    format!(
        "{} [{}] {}, {} ({}) - ({}) {}, {}",
        m.id,
        format_match_date(&m.date),
        name(&m.team1.players[0]),
        name(&m.team1.players[1]),
        m.team1.score,
        m.team2.score,
        name(&m.team2.players[0]),
        name(&m.team2.players[1]),
    )
}

fn print_summary(manager: &TrackerManager) -> Result<()> {
    let players = manager.players()?;
    let summary = manager.summary(DEFAULT_SUMMARY_SIZE)?;

    println!("Top players");
    if summary.top_players.is_empty() {
        println!("  (no players registered)");
    }
    for (index, row) in summary.top_players.iter().enumerate() {
        println!("  {}. {} - {} pts", index + 1, row.name, row.points);
    }

    println!();
    println!("Recent matches");
    if summary.recent_matches.is_empty() {
        println!("  (no matches recorded)");
    }
    for m in &summary.recent_matches {
        println!("  {}", format_match_line(&players, m));
    }

    Ok(())
}

fn print_ranking(manager: &TrackerManager) -> Result<()> {
    let standings = manager.standings()?;

    println!(
        "{:<4} {:<20} {:>4} {:>4} {:>7}",
        "Pos", "Player", "GP", "GW", "Points"
    );
    for (index, row) in standings.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>4} {:>4} {:>7}",
            index + 1,
            row.name,
            row.games_played,
            row.games_won,
            row.points
        );
    }

    Ok(())
}

fn print_players(manager: &TrackerManager) -> Result<()> {
    for player in manager.players()? {
        println!(
            "{} {} ({} played, {} won, {} pts)",
            player.id, player.name, player.games_played, player.games_won, player.points
        );
    }
    Ok(())
}

fn print_matches(manager: &TrackerManager) -> Result<()> {
    let players = manager.players()?;
    for m in manager.matches()? {
        println!("{}", format_match_line(&players, &m));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    init_logging(&config.service.log_level)?;
    debug!(
        "Using data directory {}",
        config.storage.data_dir.display()
    );

    let store = Arc::new(JsonFileStore::open(&config.storage.data_dir)?);
    let manager = TrackerManager::new(store, DeletionGate::new(config.gate.deletion_code));

    match args.command {
        Command::Summary => print_summary(&manager)?,
        Command::Ranking => print_ranking(&manager)?,
        Command::Players => print_players(&manager)?,
        Command::AddPlayer { name } => {
            let player = manager.add_player(&name)?;
            println!("Registered '{}' with id {}", player.name, player.id);
        }
        Command::Matches => print_matches(&manager)?,
        Command::Record {
            players,
            score1,
            score2,
        } => {
            let selected: [PlayerId; MATCH_PLAYERS] =
                players.try_into().map_err(|_| TrackerError::InvalidMatchSetup {
                    reason: "exactly four player ids are required".to_string(),
                })?;
            let recorded = manager.record_match(selected, score1, score2)?;
            println!(
                "Recorded match {} ({} - {})",
                recorded.id, score1, score2
            );
        }
        Command::DeleteMatch { id, code } => {
            manager.delete_match(id, &code)?;
            println!("Match {} deleted", id);
        }
        Command::DeletePlayer { id, code } => {
            manager.delete_player(id, &code)?;
            println!("Player {} deleted", id);
        }
    }

    Ok(())
}
