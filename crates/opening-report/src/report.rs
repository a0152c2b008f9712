//! JSON report assembled from a parsed corpus.

use std::collections::BTreeMap;

use chess_core::stats::{win_loss_by_elo, win_loss_by_moves, win_loss_by_opening, EloSplit, WinLoss};
use chess_core::{search, ChessCoreError, GameRecord, SearchResult};
use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct Report {
    pub games: usize,
    pub by_opening: BTreeMap<String, WinLoss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_elo: Option<EloReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_moves: Option<MovesReport>,
    pub best_opening: BestOpening,
}

#[derive(Debug, Serialize)]
pub struct EloReport {
    pub lower: i32,
    pub upper: i32,
    #[serde(flatten)]
    pub split: EloSplit,
}

#[derive(Debug, Serialize)]
pub struct MovesReport {
    pub moves: Vec<String>,
    #[serde(flatten)]
    pub counts: WinLoss,
}

#[derive(Debug, Serialize)]
pub struct BestOpening {
    pub depth: usize,
    pub tolerance: usize,
    #[serde(flatten)]
    pub result: SearchResult,
}

pub fn build_report(games: &[GameRecord], config: &Config) -> Result<Report, ChessCoreError> {
    let by_elo = config.elo_range.map(|(lower, upper)| EloReport {
        lower,
        upper,
        split: win_loss_by_elo(games, lower, upper),
    });

    let by_moves = match &config.opening_moves {
        Some(moves) => Some(MovesReport {
            moves: moves.clone(),
            counts: win_loss_by_moves(games, moves)?,
        }),
        None => None,
    };

    let result = search(games, config.search_depth, config.search_tolerance)?;

    Ok(Report {
        games: games.len(),
        by_opening: win_loss_by_opening(games),
        by_elo,
        by_moves,
        best_opening: BestOpening {
            depth: config.search_depth,
            tolerance: config.search_tolerance,
            result,
        },
    })
}
