//! Winning-line generation for arbitrary rectangular boards.

use crate::config::{BoardConfig, WinRule};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ordered board indices that win when all hold the same mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
pub struct WinLine(Vec<usize>);

impl WinLine {
    /// The indices on this line, in emission order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of cells on the line.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a line with no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Generates every winning line for `config`.
///
/// Lines are emitted rows first, then columns, then descending diagonals,
/// then ascending diagonals. Win detection relies on this order to pick
/// the reported line when several complete at once.
///
/// A config that fails [`BoardConfig::validate`] has no winning lines.
#[instrument]
pub fn generate_winning_lines(config: &BoardConfig) -> Vec<WinLine> {
    if let Err(e) = config.validate() {
        warn!(error = %e, "Invalid board config, generating no lines");
        return Vec::new();
    }

    let mut lines = row_lines(config);
    lines.extend(column_lines(config));
    lines.extend(diagonal_lines(config));
    debug!(count = lines.len(), "Generated winning lines");
    lines
}

/// Full-width rows, left to right. Applies to both rules.
fn row_lines(config: &BoardConfig) -> Vec<WinLine> {
    let cols = config.cols();
    (0..config.rows())
        .map(|row| WinLine((0..cols).map(|col| row * cols + col).collect()))
        .collect()
}

/// One line per column, top to bottom.
///
/// The split rule takes `vertical` cells from row 0; the uniform rule
/// takes the whole column.
fn column_lines(config: &BoardConfig) -> Vec<WinLine> {
    let cols = config.cols();
    let length = match config.rule() {
        WinRule::Uniform { .. } => config.rows(),
        WinRule::Split { vertical, .. } => vertical,
    };
    (0..cols)
        .map(|col| WinLine((0..length).map(|row| row * cols + col).collect()))
        .collect()
}

fn diagonal_lines(config: &BoardConfig) -> Vec<WinLine> {
    let rows = config.rows();
    let cols = config.cols();

    match config.rule() {
        WinRule::Uniform { .. } if rows == cols => vec![
            WinLine((0..rows).map(|i| i * cols + i).collect()),
            WinLine((0..rows).map(|i| i * cols + (cols - 1 - i)).collect()),
        ],
        WinRule::Uniform { .. } => Vec::new(),
        WinRule::Split { vertical, .. } => {
            let descending = (0..=cols - vertical).map(|start| {
                WinLine((0..vertical).map(|row| row * cols + start + row).collect())
            });
            let ascending = (vertical - 1..cols).map(|start| {
                WinLine((0..vertical).map(|row| row * cols + start - row).collect())
            });
            descending.chain(ascending).collect()
        }
    }
}
