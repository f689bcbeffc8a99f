//! Tests for line generation and terminal-state evaluation.

use gridtoe::{
    Board, BoardConfig, GameStatus, Mode, Player, RuleSet, WinRule, check_result,
    generate_winning_lines,
};
use strum::IntoEnumIterator;

#[test]
fn test_line_counts_per_mode() {
    assert_eq!(generate_winning_lines(&Mode::ThreeByThree.config()).len(), 8);
    assert_eq!(generate_winning_lines(&Mode::FiveByFive.config()).len(), 12);
    // 3 rows + 8 columns + 6 descending + 6 ascending diagonals
    assert_eq!(generate_winning_lines(&Mode::ThreeByEight.config()).len(), 23);
}

#[test]
fn test_line_lengths_follow_orientation() {
    let config = Mode::ThreeByEight.config();
    let lines = generate_winning_lines(&config);
    let (rows, rest) = lines.split_at(3);
    assert!(rows.iter().all(|l| l.len() == 8));
    assert!(rest.iter().all(|l| l.len() == 3));

    for mode in [Mode::ThreeByThree, Mode::FiveByFive] {
        let config = mode.config();
        let lines = generate_winning_lines(&config);
        assert!(lines.iter().all(|l| l.len() == config.rows()));
    }
}

#[test]
fn test_indices_in_range() {
    for mode in Mode::iter() {
        let config = mode.config();
        for line in generate_winning_lines(&config) {
            assert!(line.indices().iter().all(|&i| i < config.cell_count()));
        }
    }
}

#[test]
fn test_lines_have_no_repeated_cells() {
    for mode in Mode::iter() {
        for line in generate_winning_lines(&mode.config()) {
            let mut cells = line.indices().to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), line.len());
        }
    }
}

#[test]
fn test_center_in_more_lines_than_corner() {
    for (mode, center) in [(Mode::ThreeByThree, 4), (Mode::FiveByFive, 12)] {
        let config = mode.config();
        let lines = generate_winning_lines(&config);
        let appearances = |index: usize| lines.iter().filter(|l| l.contains(index)).count();

        assert_eq!(appearances(0), 3);
        assert_eq!(appearances(center), 4);
        // Edge cells off the diagonals sit on one row and one column.
        assert_eq!(appearances(1), 2);
    }
}

#[test]
fn test_three_by_eight_coverage() {
    let lines = generate_winning_lines(&Mode::ThreeByEight.config());
    let appearances = |index: usize| lines.iter().filter(|l| l.contains(index)).count();
    // Top-left corner: row, column, one descending diagonal.
    assert_eq!(appearances(0), 3);
    // Middle of row 1: row, column, one diagonal each way.
    assert_eq!(appearances(11), 4);
}

#[test]
fn test_generation_is_deterministic() {
    for mode in Mode::iter() {
        assert_eq!(
            generate_winning_lines(&mode.config()),
            generate_winning_lines(&mode.config())
        );
    }
}

#[test]
fn test_empty_board_no_winner() {
    for mode in Mode::iter() {
        let config = mode.config();
        let board = Board::new(&config);
        assert_eq!(check_result(&board, &config), GameStatus::InProgress);
    }
}

#[test]
fn test_full_board_no_line_is_draw() {
    let config = Mode::ThreeByThree.config();
    let board = Board::parse(3, 3, "XOX XOO OXX").unwrap();
    assert_eq!(check_result(&board, &config), GameStatus::Draw);
}

#[test]
fn test_single_complete_line_reported() {
    let config = Mode::FiveByFive.config();
    let board = Board::parse(
        5,
        5,
        "....X
         ...X.
         ..X..
         .XOO.
         X.OO.",
    )
    .unwrap();
    match check_result(&board, &config) {
        GameStatus::Won { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), &[4, 8, 12, 16, 20]);
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn test_vertical_win_on_split_board() {
    let config = Mode::ThreeByEight.config();
    let board = Board::parse(3, 8, "...O.... XX.O.... ...O....").unwrap();
    let status = check_result(&board, &config);
    assert_eq!(status.winner(), Some(Player::O));
    assert_eq!(status.line().unwrap().indices(), &[3, 11, 19]);
}

#[test]
fn test_evaluation_is_idempotent() {
    let config = Mode::ThreeByThree.config();
    let rules = RuleSet::new(config);
    for cells in ["... ... ...", "OXO XOX ...", "OOO XX. ...", "XOX XOO OXX"] {
        let board = Board::parse(3, 3, cells).unwrap();
        let before = board.clone();
        assert_eq!(rules.evaluate(&board), rules.evaluate(&board));
        assert_eq!(check_result(&board, &config), rules.evaluate(&board));
        assert_eq!(board, before);
    }
}

#[test]
fn test_custom_square_split_board() {
    let config = BoardConfig::new(
        4,
        6,
        WinRule::Split {
            vertical: 4,
            horizontal: 6,
        },
    );
    assert!(config.validate().is_ok());
    // 4 rows + 6 columns + 3 descending + 3 ascending
    assert_eq!(generate_winning_lines(&config).len(), 16);
}
