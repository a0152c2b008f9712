//! Integration tests for corpus statistics.

mod common;

use chess_core::parse_pgn;
use chess_core::read_pgn_file;
use chess_core::stats::{win_loss_by_elo, win_loss_by_moves, win_loss_by_opening, EloSplit, WinLoss};
use common::{fixture_path, opening_corpus};

#[test]
fn test_by_opening_on_fixture() {
    let games = read_pgn_file(fixture_path("sample.pgn")).unwrap();
    let by_opening = win_loss_by_opening(&games);

    let openings: Vec<&str> = by_opening.keys().map(String::as_str).collect();
    assert_eq!(
        openings,
        ["?", "Italian Game", "Queen's Pawn Game", "Sicilian Defense: Najdorf Variation"]
    );
    assert_eq!(by_opening["Italian Game"], WinLoss { white_wins: 1, black_wins: 0 });
    assert_eq!(
        by_opening["Sicilian Defense: Najdorf Variation"],
        WinLoss { white_wins: 0, black_wins: 1 }
    );
    // the draw and the untagged game
    assert_eq!(by_opening["?"], WinLoss::default());
}

#[test]
fn test_by_elo_on_fixture() {
    let games = read_pgn_file(fixture_path("sample.pgn")).unwrap();

    // gaps: 62 (higher-rated white wins), 325 (higher-rated black wins)
    assert_eq!(
        win_loss_by_elo(&games, 0, 600),
        EloSplit { lower_elo_wins: 0, higher_elo_wins: 2 }
    );
    assert_eq!(
        win_loss_by_elo(&games, 0, 100),
        EloSplit { lower_elo_wins: 0, higher_elo_wins: 1 }
    );
    assert_eq!(
        win_loss_by_elo(&games, 400, 600),
        EloSplit::default()
    );
}

#[test]
fn test_by_moves_on_opening_corpus() {
    let games = parse_pgn(&opening_corpus());

    assert_eq!(
        win_loss_by_moves(&games, &["e4", "e5"]).unwrap(),
        WinLoss { white_wins: 30, black_wins: 10 }
    );
    assert_eq!(
        win_loss_by_moves(&games, &["e4", "e5", "Nf3", "Nc6"]).unwrap(),
        WinLoss { white_wins: 27, black_wins: 10 }
    );
    assert_eq!(
        win_loss_by_moves(&games, &["d4", "d5", "c4"]).unwrap(),
        WinLoss { white_wins: 18, black_wins: 2 }
    );
    assert_eq!(
        win_loss_by_moves(&games, &["h4"]).unwrap(),
        WinLoss::default()
    );
}
