//! Opening report
//!
//! Reads a PGN file and prints win statistics as JSON on stdout.
//!
//! Usage: opening-report [pgn_file]
//!
//! Configuration comes from the environment (or a `.env` file): PGN_FILE,
//! SEARCH_DEPTH, SEARCH_TOLERANCE, ELO_LOWER/ELO_UPPER, OPENING_MOVES.

mod config;
mod report;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env(std::env::args().nth(1))?;

    info!(path = %config.pgn_file.display(), "Reading PGN file");
    let games = chess_core::read_pgn_file(&config.pgn_file)
        .with_context(|| format!("failed to read {}", config.pgn_file.display()))?;
    info!(games = games.len(), "Parsed games");

    let report = report::build_report(&games, &config)?;
    if report.best_opening.result.games == 0 {
        warn!(
            depth = config.search_depth,
            tolerance = config.search_tolerance,
            "No opening line reaches the tolerance"
        );
    } else {
        info!(
            moves = ?report.best_opening.result.moves,
            win_probability = report.best_opening.result.win_probability,
            games = report.best_opening.result.games,
            "Best opening line"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
