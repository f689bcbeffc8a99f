//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::game::GameState;

/// Invariant: History length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
