//! Variable-board tic-tac-toe: rules engine and computer opponent.
//!
//! # Architecture
//!
//! - [`config`]: board shapes, win rules and the fixed [`Mode`] table
//! - [`rules`]: winning-line generation and terminal-state evaluation
//! - [`search`]: depth-limited minimax with alpha-beta pruning
//! - [`game`]: the [`GameState`] value a front end owns and mutates
//! - [`contracts`] / [`invariants`]: move preconditions and postconditions
//!
//! # Example
//!
//! ```
//! use gridtoe::{GameState, Mode, Player};
//!
//! let mut game = GameState::new(Mode::ThreeByThree, Player::X);
//! let opening = game.play_ai().unwrap();
//! assert_eq!(opening, Some(4));
//! game.play(0).unwrap();
//! println!("{}", game.board().display());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod contracts;
pub mod game;
pub mod invariants;
pub mod rules;
pub mod search;
pub mod types;

pub use action::{Move, MoveError, apply_move, is_cell_available};
pub use config::{BoardConfig, ConfigError, Mode, WinRule};
pub use game::{GameState, HumanMark};
pub use rules::{RuleSet, WinLine, check_result, generate_winning_lines};
pub use search::{SearchReport, best_move, search};
pub use types::{Board, GameStatus, Player, Square};
