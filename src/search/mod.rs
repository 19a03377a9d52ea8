//! Search module for the Othello AI
//!
//! Contains:
//! - Depth representation (bounded plies or search-to-the-end)
//! - Negamax search with alpha-beta pruning

pub mod alphabeta;

pub use alphabeta::{Depth, SearchResult, Searcher, INF};
