//! Evaluation module for Othello positions
//!
//! Leaf scoring is pure material: pieces owned minus pieces owned by the
//! opponent. Corners, mobility and stability are not considered.

pub mod material;

pub use material::{evaluate, MAX_SCORE};
