//! Opening search: find the move prefix with the best white win rate.
//!
//! The search walks a tree of move prefixes built only from moves that occur
//! in the games, down to a fixed ply depth. A leaf counts only if at least
//! `tolerance` games reach it.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::ChessCoreError;
use crate::game_record::{GameRecord, MAX_PLIES, NO_MOVE, WHITE_WIN};

/// Best prefix found by [`search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub win_probability: f64,
    pub moves: Vec<String>,
    pub games: usize,
}

impl SearchResult {
    /// Returned when no prefix reaches the tolerance.
    pub fn not_found() -> Self {
        Self {
            win_probability: 0.0,
            moves: Vec::new(),
            games: 0,
        }
    }
}

/// Search `games` for the `depth`-ply prefix that maximizes white's win rate
/// among prefixes reached by at least `tolerance` games.
///
/// Ties keep the first prefix found, visiting moves in the order they first
/// appear in the games. The probability is rounded to 4 decimal places.
pub fn search(
    games: &[GameRecord],
    depth: usize,
    tolerance: usize,
) -> Result<SearchResult, ChessCoreError> {
    if depth > MAX_PLIES {
        return Err(ChessCoreError::DepthOutOfRange {
            depth,
            max: MAX_PLIES,
        });
    }

    let all: Vec<&GameRecord> = games.iter().collect();
    let mut prefix = Vec::with_capacity(depth);
    let best = OpeningSearch { depth, tolerance }.descend(&all, &mut prefix);

    let result = if best.games >= tolerance {
        SearchResult {
            win_probability: round_probability(best.win_probability),
            ..best
        }
    } else {
        SearchResult::not_found()
    };

    debug!(
        depth,
        tolerance,
        games = games.len(),
        matched = result.games,
        "Opening search finished"
    );
    Ok(result)
}

struct OpeningSearch {
    depth: usize,
    tolerance: usize,
}

impl OpeningSearch {
    /// `games` are exactly the games matching `prefix`.
    fn descend<'a>(&self, games: &[&'a GameRecord], prefix: &mut Vec<&'a str>) -> SearchResult {
        let ply = prefix.len();
        if ply == self.depth {
            return self.evaluate(games, prefix);
        }

        let mut best = SearchResult::not_found();
        for san in next_moves(games, ply) {
            let matching: Vec<&GameRecord> = games
                .iter()
                .copied()
                .filter(|game| game.ply(ply) == san)
                .collect();

            prefix.push(san);
            let candidate = self.descend(&matching, prefix);
            prefix.pop();

            if candidate.games >= self.tolerance
                && candidate.win_probability > best.win_probability
            {
                best = candidate;
            }
        }
        best
    }

    fn evaluate(&self, games: &[&GameRecord], prefix: &[&str]) -> SearchResult {
        let total = games.len();
        if total < self.tolerance {
            return SearchResult::not_found();
        }

        let white_wins = games.iter().filter(|game| game.result() == WHITE_WIN).count();
        let win_probability = if total > 0 {
            white_wins as f64 / total as f64
        } else {
            0.0
        };

        SearchResult {
            win_probability,
            moves: prefix.iter().map(|san| san.to_string()).collect(),
            games: total,
        }
    }
}

/// Distinct recorded moves at `ply`, in order of first appearance.
fn next_moves<'a>(games: &[&'a GameRecord], ply: usize) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    games
        .iter()
        .map(|&game| game.ply(ply))
        .filter(|san| *san != NO_MOVE && seen.insert(*san))
        .collect()
}

fn round_probability(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pgn::parse_pgn;

    fn corpus() -> Vec<GameRecord> {
        parse_pgn(
            "[Result \"1-0\"]\n\n1. e4 e5 2. Nf3 1-0\n\n\
             [Result \"0-1\"]\n\n1. e4 e5 2. Bc4 0-1\n\n\
             [Result \"1-0\"]\n\n1. d4 d5 2. c4 1-0\n\n\
             [Result \"1-0\"]\n\n1. e4 c5 2. Nf3 1-0\n\n\
             [Result \"1/2-1/2\"]\n\n1. d4 d5 2. Nf3 1/2-1/2\n",
        )
    }

    #[test]
    fn test_next_moves_keep_first_appearance_order() {
        let games = corpus();
        let all: Vec<&GameRecord> = games.iter().collect();
        assert_eq!(next_moves(&all, 0), vec!["e4", "d4"]);
        assert_eq!(next_moves(&all, 1), vec!["e5", "d5", "c5"]);
        assert!(next_moves(&all, 3).is_empty());
    }

    #[test]
    fn test_depth_zero_uses_whole_corpus() {
        let result = search(&corpus(), 0, 5).unwrap();
        assert_eq!(
            result,
            SearchResult {
                win_probability: 0.6,
                moves: vec![],
                games: 5
            }
        );

        assert_eq!(search(&corpus(), 0, 6).unwrap(), SearchResult::not_found());
    }

    #[test]
    fn test_first_found_wins_ties() {
        // e4 e5 Nf3, d4 d5 c4 and e4 c5 Nf3 all score 1.0 with one game each.
        let result = search(&corpus(), 3, 1).unwrap();
        assert_eq!(result.moves, vec!["e4", "e5", "Nf3"]);
        assert_eq!(result.win_probability, 1.0);
        assert_eq!(result.games, 1);
    }

    #[test]
    fn test_tolerance_filters_leaves() {
        let result = search(&corpus(), 2, 2).unwrap();
        assert_eq!(result.moves, vec!["e4", "e5"]);
        assert_eq!(result.win_probability, 0.5);
        assert_eq!(result.games, 2);
    }

    #[test]
    fn test_depth_past_grid_is_rejected() {
        let err = search(&corpus(), MAX_PLIES + 1, 1).unwrap_err();
        assert!(matches!(err, ChessCoreError::DepthOutOfRange { depth: 41, max: 40 }));
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(search(&[], 2, 1).unwrap(), SearchResult::not_found());
        assert_eq!(search(&[], 0, 0).unwrap(), SearchResult::not_found());
    }

    #[test]
    fn test_round_probability() {
        assert_eq!(round_probability(27.0 / 41.0), 0.6585);
        assert_eq!(round_probability(6.0 / 7.0), 0.8571);
        assert_eq!(round_probability(1.0), 1.0);
    }
}
