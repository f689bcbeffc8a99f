//! Game rules for grid tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state. Lines
//! are derived from the board configuration and can be cached in a
//! [`RuleSet`] so the search does not regenerate them at every node.

pub mod lines;
pub mod win;

pub use lines::{WinLine, generate_winning_lines};
pub use win::{check_winner, winning_line};

use crate::config::BoardConfig;
use crate::types::{Board, GameStatus, Player};
use tracing::instrument;

/// A board configuration together with its winning lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    config: BoardConfig,
    lines: Vec<WinLine>,
}

impl RuleSet {
    /// Generates and caches the lines for `config`.
    ///
    /// An invalid config yields a rule set with no lines, so no board
    /// ever wins under it; check [`BoardConfig::validate`] first to
    /// surface the error.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            lines: generate_winning_lines(&config),
            config,
        }
    }

    /// The configuration these rules were built for.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The winning lines, in emission order.
    pub fn lines(&self) -> &[WinLine] {
        &self.lines
    }

    /// First completed line and its owner, without allocating.
    pub fn winning_line(&self, board: &Board) -> Option<(Player, &WinLine)> {
        winning_line(board, &self.lines)
    }

    /// Evaluates the board: win on the first completed line, draw on a
    /// full board, otherwise in progress.
    pub fn evaluate(&self, board: &Board) -> GameStatus {
        if let Some((player, line)) = self.winning_line(board) {
            return GameStatus::Won {
                player,
                line: line.clone(),
            };
        }
        if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

/// Evaluates a board against a configuration.
///
/// Convenience for one-off checks; callers evaluating repeatedly should
/// hold a [`RuleSet`].
#[instrument(skip(board))]
pub fn check_result(board: &Board, config: &BoardConfig) -> GameStatus {
    RuleSet::new(*config).evaluate(board)
}
