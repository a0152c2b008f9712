//! Shared helpers for building synthetic PGN text.

#![allow(dead_code)]

use std::path::PathBuf;

/// Render one game: tag lines, a blank line, numbered movetext and result.
pub fn pgn_game(tags: &[(&str, &str)], moves: &[&str], result: &str) -> String {
    let mut pgn = String::new();
    for (name, value) in tags {
        pgn.push_str(&format!("[{name} \"{value}\"]\n"));
    }
    pgn.push('\n');

    let numbered: Vec<String> = moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect();
    pgn.push_str(&numbered.join(" "));
    pgn.push(' ');
    pgn.push_str(result);
    pgn.push_str("\n\n");
    pgn
}

/// `count` games sharing the same moves; the first `white_wins` are 1-0,
/// the next `black_wins` are 0-1 and the rest are draws.
pub fn game_batch(moves: &[&str], count: usize, white_wins: usize, black_wins: usize) -> String {
    (0..count)
        .map(|i| {
            let result = if i < white_wins {
                "1-0"
            } else if i < white_wins + black_wins {
                "0-1"
            } else {
                "1/2-1/2"
            };
            pgn_game(&[("Result", result)], moves, result)
        })
        .collect()
}

/// Opening corpus with three well-supported lines:
///
/// - `e4 e5 Nf3`: 41 games, 27 white wins
/// - `d4 d5 c4`: 21 games, 18 white wins
/// - `d4 d6 c4`: 5 games, all white wins
///
/// plus short and sparse games that must not disturb those lines.
pub fn opening_corpus() -> String {
    let mut pgn = String::new();
    pgn.push_str(&game_batch(&["e4", "e5"], 3, 3, 0));
    pgn.push_str(&game_batch(&["e4", "e5", "Nf3", "Nc6", "Bb5"], 41, 27, 10));
    pgn.push_str(&game_batch(&["e4", "c5", "Nf3"], 4, 4, 0));
    pgn.push_str(&game_batch(&["d4", "d5", "c4", "e6"], 21, 18, 2));
    pgn.push_str(&game_batch(&["d4"], 2, 2, 0));
    pgn.push_str(&game_batch(&["d4", "d6", "c4"], 5, 5, 0));
    pgn.push_str(&game_batch(&["c4", "e5", "Nc3"], 1, 1, 0));
    pgn
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
