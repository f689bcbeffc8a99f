//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::game::GameState;
use crate::types::{Board, Square};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must reproduce the current
/// board, with every move landing on an empty cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new(game.config());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.index) {
                return false;
            }
            reconstructed.put(mov.index, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
