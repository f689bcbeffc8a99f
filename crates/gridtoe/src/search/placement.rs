//! Scoped hypothetical placement for tree search.

use crate::types::{Board, Player, Square};
use std::ops::{Deref, DerefMut};

/// Marks one cell for the lifetime of the guard and clears it on drop.
///
/// The board is only reachable through the guard while the mark is in
/// place, so every exit from a search branch (including an alpha-beta
/// cutoff) restores the cell.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    /// Places `player` at `index`, which must be an empty in-range cell.
    pub(crate) fn new(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index), "placement on unavailable cell {index}");
        board.put(index, Square::Occupied(player));
        Self { board, index }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.put(self.index, Square::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_restored_on_drop() {
        let mut board = Board::with_dimensions(3, 3);
        {
            let placed = Placement::new(&mut board, 4, Player::X);
            assert_eq!(placed.get(4), Some(Square::Occupied(Player::X)));
        }
        assert!(board.is_empty(4));
    }

    #[test]
    fn test_nested_placements_unwind() {
        let mut board = Board::with_dimensions(3, 3);
        {
            let mut outer = Placement::new(&mut board, 0, Player::O);
            {
                let inner = Placement::new(&mut outer, 1, Player::X);
                assert_eq!(inner.occupied_count(), 2);
            }
            assert_eq!(outer.occupied_count(), 1);
        }
        assert_eq!(board.occupied_count(), 0);
    }
}
