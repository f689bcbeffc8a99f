//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: Players alternate turns, O first.
///
/// While the game is live, the player to move must be the one the
/// history length implies.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::first()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if !game.is_active() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::first()
        } else {
            Player::first().opponent()
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}
