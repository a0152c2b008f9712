//! Counting legal move sequences from a given move history.

use shakmaty::san::{San, SanPlus};
use shakmaty::{Chess, Position};

use crate::error::ChessCoreError;

/// Source of legal continuations for a game given as SAN moves from the
/// standard starting position.
pub trait MoveOracle {
    fn possible_moves(&self, history: &[String]) -> Result<Vec<String>, ChessCoreError>;
}

/// Move oracle backed by shakmaty's legal move generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyOracle;

impl ShakmatyOracle {
    /// Replay `history` from the starting position.
    pub fn replay(history: &[String]) -> Result<Chess, ChessCoreError> {
        let mut pos = Chess::default();
        for (ply, san_str) in history.iter().enumerate() {
            let san: San = san_str
                .parse::<SanPlus>()
                .map(|san_plus| san_plus.san)
                .map_err(|_| ChessCoreError::InvalidSan {
                    ply,
                    san: san_str.clone(),
                })?;
            let mv = san.to_move(&pos).map_err(|_| ChessCoreError::IllegalMove {
                ply,
                san: san_str.clone(),
            })?;
            pos.play_unchecked(mv);
        }
        Ok(pos)
    }
}

impl MoveOracle for ShakmatyOracle {
    fn possible_moves(&self, history: &[String]) -> Result<Vec<String>, ChessCoreError> {
        let pos = Self::replay(history)?;
        Ok(pos
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let mut next = pos.clone();
                SanPlus::from_move_and_play_unchecked(&mut next, mv).to_string()
            })
            .collect())
    }
}

/// Number of distinct legal move sequences of exactly `depth` plies after
/// `history`. A depth of zero counts the current position once.
pub fn count_positions<O: MoveOracle + ?Sized>(
    oracle: &O,
    history: &[String],
    depth: usize,
) -> Result<u64, ChessCoreError> {
    let mut line = history.to_vec();
    count_from(oracle, &mut line, depth)
}

fn count_from<O: MoveOracle + ?Sized>(
    oracle: &O,
    line: &mut Vec<String>,
    depth: usize,
) -> Result<u64, ChessCoreError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut total = 0;
    for mv in oracle.possible_moves(line)? {
        line.push(mv);
        let count = count_from(oracle, line, depth - 1);
        line.pop();
        total += count?;
    }
    Ok(total)
}
