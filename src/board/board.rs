//! Flat row-major grid of stones

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. Occupancy is the caller's concern.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = Stone::Empty;
    }

    /// Set every cell back to empty
    pub fn clear(&mut self) {
        self.cells = [Stone::Empty; TOTAL_CELLS];
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Iterate over occupied cells in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != Stone::Empty)
            .map(|(idx, &s)| (Pos::from_index(idx), s))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
