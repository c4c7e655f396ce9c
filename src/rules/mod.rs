//! Game rules for standard Gomoku
//!
//! - Stones go on empty intersections only
//! - Five or more in a row wins (overlines count)

pub mod win;

use crate::board::{Board, Pos};
use crate::error::MoveError;

// Re-exports for convenient access
pub use win::{count_direction, find_five_line_at_pos, has_five_at_pos, DIRECTIONS, WIN_LENGTH};

/// Board-level legality: coordinates on the board and the cell empty.
///
/// Game-over blocking lives in `GameState::check_move`, which calls this.
pub fn check_placement(board: &Board, row: usize, col: usize) -> Result<Pos, MoveError> {
    let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied { row, col });
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_placement_on_empty_cell() {
        let board = Board::new();
        assert_eq!(check_placement(&board, 0, 14), Ok(Pos::new(0, 14)));
    }

    #[test]
    fn test_placement_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            check_placement(&board, 15, 0),
            Err(MoveError::OutOfBounds { row: 15, col: 0 })
        );
        assert_eq!(
            check_placement(&board, 3, 99),
            Err(MoveError::OutOfBounds { row: 3, col: 99 })
        );
    }

    #[test]
    fn test_placement_occupied() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 5), Stone::White);
        assert_eq!(
            check_placement(&board, 4, 5),
            Err(MoveError::Occupied { row: 4, col: 5 })
        );
    }
}
