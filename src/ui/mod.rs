//! GUI module for the Othello game
//!
//! Native GUI built on egui/eframe. The engine runs on a worker thread so
//! the board stays responsive during long searches.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::OthelloApp;
pub use game_state::{GameMode, GameState, Turn};
