//! Gomoku rule engine and hotseat GUI
//!
//! Two players alternate placing stones on a 15x15 board:
//! - Black moves first
//! - Five or more in a row (row, column or diagonal) wins
//! - Any move can be taken back, including the winning one
//!
//! # Architecture
//!
//! - [`board`]: Board representation (flat row-major grid)
//! - [`rules`]: Move legality and five-in-a-row detection
//! - [`game`]: [`GameState`], the single owner of board, history and turn
//! - [`error`]: Error types
//! - [`config`]: Front-end settings loaded from `gomoku.toml`
//! - [`ui`]: egui front end that renders the state and forwards input
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, MoveOutcome, Player};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.apply_move(7, 7), Some(MoveOutcome::Continue { next: Player::White }));
//!
//! // Occupied cells are ignored
//! assert_eq!(game.apply_move(7, 7), None);
//!
//! game.undo_last();
//! assert_eq!(game.current_player(), Player::Black);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use error::{ConfigError, MoveError, UndoError};
pub use game::{GameState, Move, MoveOutcome};
