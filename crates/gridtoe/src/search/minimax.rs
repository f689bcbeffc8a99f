//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are from the computer's perspective. A win is worth
//! [`WIN_SCORE`] minus the depth at which it happens, a loss is worth
//! `-WIN_SCORE` plus the depth, so the search prefers the quickest win and
//! the slowest loss. Positions past the configured depth limit score 0:
//! on capped boards the computer is blind beyond its horizon and plays
//! heuristically, not optimally.

use super::placement::Placement;
use crate::config::BoardConfig;
use crate::rules::{RuleSet, check_winner};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Base score of a decided game.
pub const WIN_SCORE: i32 = 10;

/// Opening preference on an empty classic board: center, then corners.
pub const OPENING_ORDER: [usize; 5] = [4, 0, 2, 6, 8];

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct SearchReport {
    /// Chosen index, `None` when no move exists.
    pub best: Option<usize>,
    /// Score of the chosen move; `None` for book moves and no-move results.
    pub score: Option<i32>,
    /// Nodes visited by the recursive search.
    pub nodes: u64,
}

/// Scores a finished position for `ai` at `depth` plies below the root.
///
/// `winner` is `None` for a draw. Wins keep strictly decreasing with
/// depth at every depth, so past [`WIN_SCORE`] plies a win can score
/// below a draw; the shipped depth limits never reach that far.
pub fn terminal_score(winner: Option<Player>, ai: Player, depth: usize) -> i32 {
    let depth = i32::try_from(depth).unwrap_or(i32::MAX);
    match winner {
        Some(player) if player == ai => WIN_SCORE.saturating_sub(depth),
        Some(_) => depth.saturating_sub(WIN_SCORE),
        None => 0,
    }
}

/// Picks the best move for `ai` against `human`.
///
/// Returns `None` if the board has no empty cell or is already decided.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Player, human: Player, config: &BoardConfig) -> Option<usize> {
    search(board, ai, human, &RuleSet::new(*config)).best
}

/// Runs the root search with cached rules and reports statistics.
#[instrument(skip(board, rules), fields(config = ?rules.config()))]
pub fn search(board: &Board, ai: Player, human: Player, rules: &RuleSet) -> SearchReport {
    if rules.winning_line(board).is_some() || board.is_full() {
        debug!("No move available");
        return SearchReport::new(None, None, 0);
    }

    if board.occupied_count() == 0 && rules.config().is_classic() {
        let best = OPENING_ORDER.iter().copied().find(|&i| board.is_empty(i));
        debug!(?best, "Opening book move");
        return SearchReport::new(best, None, 0);
    }

    let mut scratch = board.clone();
    let mut searcher = Searcher {
        rules,
        ai,
        human,
        depth_limit: rules.config().depth_limit(),
        nodes: 0,
    };

    let mut best: Option<(usize, i32)> = None;
    for index in 0..scratch.cell_count() {
        if !scratch.is_empty(index) {
            continue;
        }
        let score = {
            let mut placed = Placement::new(&mut scratch, index, ai);
            searcher.minimax(&mut placed, 0, false, i32::MIN, i32::MAX)
        };
        debug!(index, score, "Scored candidate");
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    debug!(?best, nodes = searcher.nodes, "Search complete");
    SearchReport::new(
        best.map(|(index, _)| index),
        best.map(|(_, score)| score),
        searcher.nodes,
    )
}

struct Searcher<'r> {
    rules: &'r RuleSet,
    ai: Player,
    human: Player,
    depth_limit: Option<usize>,
    nodes: u64,
}

impl Searcher<'_> {
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(winner) = check_winner(board, self.rules.lines()) {
            return terminal_score(Some(winner), self.ai, depth);
        }
        if board.is_full() {
            return terminal_score(None, self.ai, depth);
        }
        if self.depth_limit.is_some_and(|limit| depth >= limit) {
            return 0;
        }

        let (mover, mut best) = if maximizing {
            (self.ai, i32::MIN)
        } else {
            (self.human, i32::MAX)
        };

        for index in 0..board.cell_count() {
            if !board.is_empty(index) {
                continue;
            }
            let score = {
                let mut placed = Placement::new(board, index, mover);
                self.minimax(&mut placed, depth + 1, !maximizing, alpha, beta)
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;

    #[test]
    fn test_faster_win_scores_higher() {
        assert!(terminal_score(Some(Player::X), Player::X, 1) > terminal_score(Some(Player::X), Player::X, 3));
        assert!(terminal_score(Some(Player::O), Player::X, 5) > terminal_score(Some(Player::O), Player::X, 1));
        assert_eq!(terminal_score(None, Player::X, 4), 0);
    }

    #[test]
    fn test_depth_ordering_holds_past_base_score() {
        for depth in 0..24 {
            assert!(terminal_score(Some(Player::O), Player::O, depth) > terminal_score(Some(Player::O), Player::O, depth + 1));
            assert!(terminal_score(Some(Player::X), Player::O, depth) < terminal_score(Some(Player::X), Player::O, depth + 1));
        }
        assert_eq!(terminal_score(Some(Player::O), Player::O, usize::MAX), WIN_SCORE - i32::MAX);
    }

    #[test]
    fn test_immediate_win_scores_full_value() {
        assert_eq!(terminal_score(Some(Player::O), Player::O, 0), WIN_SCORE);
        assert_eq!(terminal_score(Some(Player::X), Player::O, 0), -WIN_SCORE);
    }

    #[test]
    fn test_opening_book_used_on_empty_classic_board() {
        let rules = RuleSet::new(Mode::ThreeByThree.config());
        let board = Board::new(rules.config());
        let report = search(&board, Player::O, Player::X, &rules);
        assert_eq!(report.best, Some(4));
        assert_eq!(report.nodes, 0);
    }

    #[test]
    fn test_takes_winning_move() {
        let rules = RuleSet::new(Mode::ThreeByThree.config());
        let board = Board::parse(3, 3, "OO. XX. ...").unwrap();
        let report = search(&board, Player::X, Player::O, &rules);
        assert_eq!(report.best, Some(5));
        assert_eq!(report.score, Some(WIN_SCORE));
    }

    #[test]
    fn test_blocks_opponent() {
        let rules = RuleSet::new(Mode::ThreeByThree.config());
        let board = Board::parse(3, 3, "OO. .X. ...").unwrap();
        assert_eq!(search(&board, Player::X, Player::O, &rules).best, Some(2));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let rules = RuleSet::new(Mode::ThreeByThree.config());
        let board = Board::parse(3, 3, "O.. .X. ...").unwrap();
        let before = board.clone();
        let _ = search(&board, Player::O, Player::X, &rules);
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_move_on_full_or_decided_board() {
        let rules = RuleSet::new(Mode::ThreeByThree.config());
        let full = Board::parse(3, 3, "OXO OXX XOO").unwrap();
        assert_eq!(search(&full, Player::X, Player::O, &rules).best, None);

        let decided = Board::parse(3, 3, "OOO XX. ...").unwrap();
        assert_eq!(search(&decided, Player::X, Player::O, &rules).best, None);
    }
}
