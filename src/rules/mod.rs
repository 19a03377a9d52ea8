//! Othello rules
//!
//! This module implements the rule set shared by the search and by any
//! caller that needs to validate or render moves:
//! - Legal move generation
//! - Move application (placement and flips)
//! - Game-over detection and scoring

pub mod flip;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{apply_move, flipped_cells};
pub use moves::{has_legal_move, is_legal_move, legal_moves, mobility};
pub use outcome::{is_game_over, outcome, Outcome};
