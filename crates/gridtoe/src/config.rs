//! Board configurations and the fixed mode table.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How long a line must be to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// One length for rows, columns and (on square boards) both diagonals.
    Uniform {
        /// Cells needed in a line.
        length: usize,
    },
    /// Asymmetric boards: vertical and diagonal runs use `vertical`,
    /// horizontal lines span the full row.
    Split {
        /// Cells needed vertically and diagonally.
        vertical: usize,
        /// Cells needed horizontally.
        horizontal: usize,
    },
}

/// Immutable board shape plus the search horizon that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    rule: WinRule,
    /// Maximum search depth in plies; `None` searches to the end.
    depth_limit: Option<usize>,
}

impl BoardConfig {
    /// Creates a configuration that searches to full depth.
    pub const fn new(rows: usize, cols: usize, rule: WinRule) -> Self {
        Self {
            rows,
            cols,
            rule,
            depth_limit: None,
        }
    }

    /// Caps the search at `limit` plies.
    pub const fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The win rule.
    pub fn rule(&self) -> WinRule {
        self.rule
    }

    /// Search depth cap, if any.
    pub fn depth_limit(&self) -> Option<usize> {
        self.depth_limit
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// True for the 3x3, three-in-a-row board.
    pub fn is_classic(&self) -> bool {
        self.rows == 3 && self.cols == 3 && self.rule == WinRule::Uniform { length: 3 }
    }

    /// Checks the shape constraints the line generator relies on.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::new(format!(
                "board must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }

        match self.rule {
            WinRule::Uniform { length } => {
                if length == 0 || length > self.rows.max(self.cols) {
                    return Err(ConfigError::new(format!(
                        "win length {} does not fit a {}x{} board",
                        length, self.rows, self.cols
                    )));
                }
            }
            WinRule::Split {
                vertical,
                horizontal,
            } => {
                if vertical == 0 || vertical > self.rows || vertical > self.cols {
                    return Err(ConfigError::new(format!(
                        "vertical win {} does not fit a {}x{} board",
                        vertical, self.rows, self.cols
                    )));
                }
                if horizontal == 0 || horizontal > self.cols {
                    return Err(ConfigError::new(format!(
                        "horizontal win {} exceeds {} columns",
                        horizontal, self.cols
                    )));
                }
            }
        }

        debug!("Board config is valid");
        Ok(())
    }
}

/// The three shipped game modes.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// 3x3, three in a row, exhaustive search.
    #[default]
    ThreeByThree,
    /// 5x5, five in a row, four-ply search.
    FiveByFive,
    /// 3 rows by 8 columns; three vertically or diagonally, eight across.
    ThreeByEight,
}

impl Mode {
    /// Resolves the mode to its board configuration.
    pub const fn config(self) -> BoardConfig {
        match self {
            Mode::ThreeByThree => BoardConfig::new(3, 3, WinRule::Uniform { length: 3 }),
            Mode::FiveByFive => {
                BoardConfig::new(5, 5, WinRule::Uniform { length: 5 }).with_depth_limit(4)
            }
            Mode::ThreeByEight => BoardConfig::new(
                3,
                8,
                WinRule::Split {
                    vertical: 3,
                    horizontal: 8,
                },
            )
            .with_depth_limit(3),
        }
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Mode::ThreeByThree => "3x3",
            Mode::FiveByFive => "5x5",
            Mode::ThreeByEight => "3x8",
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
