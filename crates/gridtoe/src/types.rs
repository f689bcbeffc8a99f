//! Core domain types for grid tic-tac-toe.

use crate::config::BoardConfig;
use crate::rules::WinLine;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player O (always moves first).
    O,
    /// Player X (moves second).
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Returns the player that opens every game.
    pub fn first() -> Self {
        Player::O
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Rectangular board addressed by linear index `row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Cells in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board sized for the configuration.
    pub fn new(config: &BoardConfig) -> Self {
        Self::with_dimensions(config.rows(), config.cols())
    }

    /// Creates an empty board with explicit dimensions.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
        }
    }

    /// Parses a board from a compact cell string.
    ///
    /// `O` and `X` are marks, `.`, `-` and `_` are empty cells. Whitespace
    /// and `|` are ignored so boards can be written row by row. Returns
    /// `None` on unknown characters or when the cell count does not match.
    pub fn parse(rows: usize, cols: usize, cells: &str) -> Option<Self> {
        let squares = cells
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'O' => Some(Square::Occupied(Player::O)),
                'X' => Some(Square::Occupied(Player::X)),
                '.' | '-' | '_' => Some(Square::Empty),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        (squares.len() == rows * cols).then_some(Self {
            rows,
            cols,
            squares,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Writes a square at an index known to be in range.
    pub(crate) fn put(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based cell number so a player can type it.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        self.display_highlighted(None)
    }

    /// Formats the board, wrapping the cells of `line` in brackets.
    pub fn display_highlighted(&self, line: Option<&WinLine>) -> String {
        let width = self.cell_count().to_string().len();
        let highlighted = |index: usize| line.is_some_and(|l| l.contains(index));

        let mut result = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = row * self.cols + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                if highlighted(index) {
                    result.push_str(&format!("[{symbol:>width$}]"));
                } else {
                    result.push_str(&format!(" {symbol:>width$} "));
                }
                if col + 1 < self.cols {
                    result.push('|');
                }
            }
            if row + 1 < self.rows {
                result.push('\n');
                let rule = vec!["-".repeat(width + 2); self.cols].join("+");
                result.push_str(&rule);
                result.push('\n');
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The first completed line in emission order.
        line: WinLine,
    },
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true while moves can still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<&WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::first(), Player::O);
    }

    #[test]
    fn test_parse_board() {
        let board = Board::parse(3, 3, "OO. XX. ...").unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
        assert!(board.is_empty(5));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(Board::parse(3, 3, "OOX").is_none());
        assert!(Board::parse(3, 3, "OO? XX. ...").is_none());
    }

    #[test]
    fn test_empty_indices() {
        let board = Board::parse(3, 3, "O.X .O. X..").unwrap();
        let empty: Vec<_> = board.empty_indices().collect();
        assert_eq!(empty, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = Board::parse(3, 3, "O.. .X. ...").unwrap();
        let text = board.display();
        assert!(text.contains('O'));
        assert!(text.contains('X'));
        assert!(text.contains('9'));
        assert_eq!(text.lines().count(), 5);
    }
}
