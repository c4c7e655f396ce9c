//! Win condition checking
//!
//! A stone wins when it completes five or more contiguous same-colour
//! stones along a row, column or either diagonal. Scans stop at the
//! first foreign/empty cell or the board edge; there is no wraparound.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count contiguous `color` stones from `pos` along `(dr, dc)`, excluding `pos` itself.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut k = 1;
    while let Some(next) = pos.offset(dr, dc, k) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        k += 1;
    }
    count
}

/// Five-in-a-row check rooted at a specific position.
///
/// Uses the colour of the stone at `pos`; an empty cell never wins.
/// Only checks the 4 lines through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + count_direction(board, pos, dr, dc, color)
            + count_direction(board, pos, -dr, -dc, color);
        count >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`, ordered along the line.
///
/// Returns the first direction (in `DIRECTIONS` order) whose run reaches
/// five; overlines are returned whole.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, color) as i32;
        let fwd = count_direction(board, pos, dr, dc, color) as i32;
        if (back + fwd + 1) as usize >= WIN_LENGTH {
            let line = (-back..=fwd)
                .filter_map(|k| pos.offset(dr, dc, k))
                .collect();
            return Some(line);
        }
    }
    None
}
