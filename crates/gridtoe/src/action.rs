//! First-class action types for grid tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::types::{Board, Player, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A move: a player placing their mark at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Linear board index (`row * cols + col`).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the board.
    #[display("Index {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Checks whether `index` is on the board and empty.
pub fn is_cell_available(board: &Board, index: usize) -> bool {
    board.is_empty(index)
}

/// Returns a copy of `board` with `mark` placed at `index`.
///
/// Occupied or out-of-range cells leave the copy unchanged; callers are
/// expected to check [`is_cell_available`] first, but a stray request is
/// a no-op rather than an error.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Player) -> Board {
    let mut next = board.clone();
    if is_cell_available(board, index) {
        next.put(index, Square::Occupied(mark));
    } else {
        warn!(index, "Ignoring move on unavailable cell");
    }
    next
}
