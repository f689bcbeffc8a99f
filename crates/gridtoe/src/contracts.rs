//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::{GameInvariants, InvariantSet};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must still be in progress.
pub struct GameActive;

impl GameActive {
    /// Rejects moves once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The index must be on the board and its cell empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects out-of-range and occupied cells.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.index >= game.board().cell_count() {
            Err(MoveError::OutOfBounds(mov.index))
        } else if !game.board().is_empty(mov.index) {
            Err(MoveError::SquareOccupied(mov.index))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameActive::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: game active, cell empty, player's turn.
/// Postconditions: every [`GameInvariants`] member holds.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use crate::types::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new(Mode::ThreeByThree, Player::O);
        assert!(MoveContract::pre(&game, &Move::new(Player::O, 4)).is_ok());
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = GameState::new(Mode::ThreeByEight, Player::O);
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Player::O, 24)),
            Err(MoveError::OutOfBounds(24))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameState::new(Mode::ThreeByThree, Player::O);
        assert!(matches!(
            MoveContract::pre(&game, &Move::new(Player::X, 4)),
            Err(MoveError::WrongPlayer(Player::X))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new(Mode::ThreeByThree, Player::O);
        let mut after = before.clone();
        after.play(4).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new(Mode::ThreeByThree, Player::O);
        let mut after = before.clone();
        after.play(4).unwrap();
        after.board.put(0, Square::Occupied(Player::X));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
