//! Game state machine: turn order, move history, undo and reset.

mod state;

pub use state::{GameState, Move, MoveOutcome};
