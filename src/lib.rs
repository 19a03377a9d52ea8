//! Othello (Reversi) AI Engine
//!
//! Computes the computer player's move for a standard 8x8 Othello position:
//! - Legal moves: place on an empty cell that brackets a run of opponent pieces
//! - Placing a piece flips every bracketed run in all 8 directions
//! - A side with no legal move passes; the game ends when neither side can move
//! - Most pieces wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Fixed 8x8 board value, cells, colors and positions
//! - [`rules`]: Move generation, move application, game-over detection
//! - [`eval`]: Material evaluation
//! - [`search`]: Negamax with alpha-beta pruning
//! - [`engine`]: Difficulty levels and the root move choice
//! - [`protocol`]: JSON request/response for one computer move
//! - [`ui`]: egui front end for playing against the engine
//!
//! # Quick Start
//!
//! ```
//! use othello::{apply_move, AIEngine, Board, Color, Difficulty};
//!
//! let mut board = Board::new();
//! let engine = AIEngine::with_difficulty(Difficulty::Easy);
//!
//! // AI plays Black's opening move
//! if let Some(pos) = engine.get_move(&board, Color::Black) {
//!     board = apply_move(&board, pos, Color::Black);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(board.piece_count(), 5);
//! ```
//!
//! # Difficulty
//!
//! | Level  | Search depth |
//! |--------|--------------|
//! | Easy   | 3 plies      |
//! | Medium | 4 plies      |
//! | Hard   | to the end of the game |
//!
//! Hard searches until neither side can move. From an early position that is
//! far too much work; set a node budget (see [`EngineConfig`]) when Hard is
//! offered outside the endgame.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod ui;

#[cfg(test)]
mod property_tests;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, Difficulty, MoveResult};
pub use error::{ConfigError, ProtocolError};
pub use eval::evaluate;
pub use rules::{apply_move, is_game_over, legal_moves};
pub use search::{Depth, SearchResult, Searcher};
