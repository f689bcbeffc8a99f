//! Adversarial search for the computer's move.

mod minimax;
mod placement;

pub use minimax::{OPENING_ORDER, SearchReport, WIN_SCORE, best_move, search, terminal_score};
