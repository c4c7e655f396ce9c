//! GUI module for the Gomoku game
//!
//! A native front end using egui/eframe. It renders `GameState` and
//! forwards input to it; it holds no rules of its own.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::{BoardOptions, BoardView};
