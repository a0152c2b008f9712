//! Win/loss counts over a parsed corpus.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ChessCoreError;
use crate::game_record::{GameRecord, Tag, BLACK_WIN, MAX_PLIES, WHITE_WIN};

/// Decisive results, split by color. Draws are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinLoss {
    pub white_wins: u32,
    pub black_wins: u32,
}

impl WinLoss {
    fn record(&mut self, result: &str) {
        match result {
            WHITE_WIN => self.white_wins += 1,
            BLACK_WIN => self.black_wins += 1,
            _ => {}
        }
    }
}

/// Decisive results, split by which side was the lower-rated player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EloSplit {
    pub lower_elo_wins: u32,
    pub higher_elo_wins: u32,
}

/// White and black wins for every opening name, including `"?"`.
pub fn win_loss_by_opening(games: &[GameRecord]) -> BTreeMap<String, WinLoss> {
    let mut by_opening: BTreeMap<String, WinLoss> = BTreeMap::new();
    for game in games {
        by_opening
            .entry(game.opening().to_string())
            .or_default()
            .record(game.result());
    }
    by_opening
}

/// Wins for the lower- and higher-rated side in games whose absolute rating
/// gap lies strictly between `lower` and `upper`.
///
/// Games with a non-numeric rating on either side are ignored. With equal
/// ratings white counts as the higher-rated side.
pub fn win_loss_by_elo(games: &[GameRecord], lower: i32, upper: i32) -> EloSplit {
    let mut split = EloSplit::default();

    for game in games {
        let (Some(white_elo), Some(black_elo)) =
            (parse_elo(game.tag(Tag::WhiteElo)), parse_elo(game.tag(Tag::BlackElo)))
        else {
            continue;
        };

        let gap = (white_elo - black_elo).abs();
        if gap <= f64::from(lower) || gap >= f64::from(upper) {
            continue;
        }

        let lower_is_white = white_elo < black_elo;
        match (game.result(), lower_is_white) {
            (WHITE_WIN, true) | (BLACK_WIN, false) => split.lower_elo_wins += 1,
            (WHITE_WIN, false) | (BLACK_WIN, true) => split.higher_elo_wins += 1,
            _ => {}
        }
    }

    split
}

/// White and black wins among games that open with `moves`.
pub fn win_loss_by_moves<S: AsRef<str>>(
    games: &[GameRecord],
    moves: &[S],
) -> Result<WinLoss, ChessCoreError> {
    if moves.len() > MAX_PLIES {
        return Err(ChessCoreError::DepthOutOfRange {
            depth: moves.len(),
            max: MAX_PLIES,
        });
    }

    let mut counts = WinLoss::default();
    for game in games.iter().filter(|game| game.matches_prefix(moves)) {
        counts.record(game.result());
    }
    Ok(counts)
}

fn parse_elo(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|elo| elo.is_finite())
}
