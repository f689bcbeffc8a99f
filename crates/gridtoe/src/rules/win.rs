//! Win detection over generated lines.

use super::lines::WinLine;
use crate::types::{Board, Player, Square};

/// Finds the first line, in emission order, held entirely by one player.
pub fn winning_line<'a>(board: &Board, lines: &'a [WinLine]) -> Option<(Player, &'a WinLine)> {
    lines.iter().find_map(|line| {
        let (first, rest) = line.indices().split_first()?;
        match board.get(*first)? {
            Square::Occupied(player)
                if rest
                    .iter()
                    .all(|&i| board.get(i) == Some(Square::Occupied(player))) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board, lines: &[WinLine]) -> Option<Player> {
    winning_line(board, lines).map(|(player, _)| player)
}
