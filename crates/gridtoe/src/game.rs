//! Explicit game state owned by the front end.

use crate::action::{Move, MoveError};
use crate::config::{BoardConfig, Mode};
use crate::contracts::{Contract, MoveContract};
use crate::rules::RuleSet;
use crate::search;
use crate::types::{Board, GameStatus, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which mark the human plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HumanMark {
    /// Human plays O and moves first.
    #[default]
    O,
    /// Human plays X and moves second.
    X,
    /// Decided by coin flip at the start of each game.
    Random,
}

impl HumanMark {
    /// Resolves the choice to a concrete mark.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            HumanMark::O => Player::O,
            HumanMark::X => Player::X,
            HumanMark::Random => {
                if rng.gen_bool(0.5) {
                    Player::O
                } else {
                    Player::X
                }
            }
        }
    }
}

/// One game on one board: mode, marks, turn, status and history.
///
/// The rules and the search are stateless; this value is the only thing
/// that changes over a game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) mode: Mode,
    pub(crate) rules: RuleSet,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) human: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Starts a game in `mode` with the human playing `human`.
    #[instrument]
    pub fn new(mode: Mode, human: Player) -> Self {
        let rules = RuleSet::new(mode.config());
        info!(mode = %mode, human = %human, "Starting new game");
        Self {
            mode,
            board: Board::new(rules.config()),
            rules,
            to_move: Player::first(),
            human,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts a game, resolving a random mark choice with the thread RNG.
    pub fn with_mark(mode: Mode, mark: HumanMark) -> Self {
        Self::new(mode, mark.resolve(&mut rand::thread_rng()))
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active board configuration.
    pub fn config(&self) -> &BoardConfig {
        self.rules.config()
    }

    /// The cached rules for the active mode.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is (the last mover once the game ends).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The computer's mark.
    pub fn ai(&self) -> Player {
        self.human.opponent()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True while moves can still be made.
    pub fn is_active(&self) -> bool {
        self.status.is_in_progress()
    }

    /// True when the game is live and the computer is to move.
    pub fn is_ai_turn(&self) -> bool {
        self.is_active() && self.to_move == self.ai()
    }

    /// Plays the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the state untouched.
    pub fn play(&mut self, index: usize) -> Result<&GameStatus, MoveError> {
        self.submit(Move::new(self.to_move, index))
    }

    /// Applies a fully specified move.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the state untouched. In debug builds a move
    /// that breaks a game invariant is rolled back and reported as
    /// [`MoveError::InvariantViolation`].
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn submit(&mut self, action: Move) -> Result<&GameStatus, MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.put(action.index, crate::types::Square::Occupied(action.player));
        self.history.push(action);
        self.status = self.rules.evaluate(&self.board);
        if self.status.is_in_progress() {
            self.to_move = self.to_move.opponent();
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(%action, status = ?self.status, "Move applied");
        Ok(&self.status)
    }

    /// Picks the best move for the player on turn without applying it.
    pub fn suggest_move(&self) -> Option<usize> {
        if !self.is_active() {
            return None;
        }
        let report = search::search(&self.board, self.to_move, self.to_move.opponent(), &self.rules);
        debug!(best = ?report.best, score = ?report.score, nodes = report.nodes, "Search report");
        report.best
    }

    /// Lets the computer move if it is its turn.
    ///
    /// Returns the chosen index, or `None` when it is not the computer's
    /// turn or no move exists.
    #[instrument(skip(self), fields(mode = %self.mode, ai = %self.ai()))]
    pub fn play_ai(&mut self) -> Result<Option<usize>, MoveError> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let Some(index) = self.suggest_move() else {
            return Ok(None);
        };
        info!(index, "Computer moves");
        self.play(index)?;
        Ok(Some(index))
    }

    /// Clears the board for a new game in the same mode with the same marks.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new(self.mode, self.human);
    }

    /// Switches mode, which always starts a fresh game.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: Mode) {
        *self = Self::new(mode, self.human);
    }

    /// Status line for the front end.
    pub fn status_message(&self) -> String {
        match &self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.to_move),
            GameStatus::Won { player, .. } => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_o_moves_first() {
        let game = GameState::new(Mode::ThreeByThree, Player::X);
        assert_eq!(game.to_move(), Player::O);
        assert!(game.is_ai_turn());
    }

    #[test]
    fn test_play_alternates() {
        let mut game = GameState::new(Mode::ThreeByThree, Player::O);
        game.play(0).unwrap();
        assert_eq!(game.to_move(), Player::X);
        game.play(4).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = GameState::new(Mode::ThreeByThree, Player::O);
        game.play(4).unwrap();
        let board = game.board().clone();
        assert_eq!(game.play(4), Err(MoveError::SquareOccupied(4)));
        assert_eq!(game.board(), &board);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_win_stops_game() {
        let mut game = GameState::new(Mode::ThreeByThree, Player::O);
        for index in [0, 3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        assert_eq!(game.status().winner(), Some(Player::O));
        assert_eq!(game.status_message(), "Player O wins!");
        assert_eq!(game.play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_random_mark_resolves() {
        let mut rng = StdRng::seed_from_u64(7);
        let marks: Vec<_> = (0..32).map(|_| HumanMark::Random.resolve(&mut rng)).collect();
        assert!(marks.contains(&Player::O));
        assert!(marks.contains(&Player::X));
        assert_eq!(HumanMark::X.resolve(&mut rng), Player::X);
    }

    #[test]
    fn test_change_mode_resets_board() {
        let mut game = GameState::new(Mode::ThreeByThree, Player::O);
        game.play(0).unwrap();
        game.change_mode(Mode::ThreeByEight);
        assert_eq!(game.board().cell_count(), 24);
        assert!(game.history().is_empty());
        assert_eq!(game.human(), Player::O);
    }

    #[test]
    fn test_play_ai_only_on_its_turn() {
        let mut game = GameState::new(Mode::ThreeByThree, Player::O);
        assert_eq!(game.play_ai(), Ok(None));
        game.play(0).unwrap();
        let index = game.play_ai().unwrap().unwrap();
        assert_eq!(game.board().get(index), Some(crate::types::Square::Occupied(Player::X)));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_invariant_failure_rolls_back() {
        let mut game = GameState::new(Mode::ThreeByThree, Player::O);
        // A recorded move with no mark on the board.
        game.history.push(Move::new(Player::O, 8));
        let board = game.board().clone();

        let result = game.play(0);
        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        assert_eq!(game.board(), &board);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), Player::O);
        assert!(game.is_active());
    }
}
