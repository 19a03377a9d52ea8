//! Main AI engine: difficulty handling and the root of the search
//!
//! The engine is a pure function of `(board, color, difficulty)`. It keeps
//! no state between calls beyond its configuration, so identical inputs
//! always produce identical moves.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Color, Difficulty};
//!
//! let engine = AIEngine::with_difficulty(Difficulty::Easy);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Color::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Color, Pos};
use crate::config::EngineConfig;
use crate::rules::legal_moves;
use crate::search::{Depth, SearchResult, Searcher};

/// Skill level of the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "DifficultyToken")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth for this level
    #[must_use]
    pub fn depth(self) -> Depth {
        match self {
            Difficulty::Easy => Depth::Bounded(3),
            Difficulty::Medium => Depth::Bounded(4),
            Difficulty::Hard => Depth::Unbounded,
        }
    }

    /// Parse a difficulty token.
    ///
    /// Accepts `easy`/`medium`/`hard` in any case and the stored numeric
    /// codes `0`/`1`/`2`. Anything else falls back to `Easy`.
    #[must_use]
    pub fn from_token(token: &str) -> Difficulty {
        match token.trim().to_ascii_lowercase().as_str() {
            "easy" | "0" => Difficulty::Easy,
            "medium" | "1" => Difficulty::Medium,
            "hard" | "2" => Difficulty::Hard,
            other => {
                warn!(token = other, "unknown difficulty, falling back to easy");
                Difficulty::Easy
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Stored form of a difficulty: a name or the numeric code
#[derive(Deserialize)]
#[serde(untagged)]
enum DifficultyToken {
    Code(i64),
    Name(String),
}

impl From<DifficultyToken> for Difficulty {
    fn from(token: DifficultyToken) -> Self {
        match token {
            DifficultyToken::Code(code) => Difficulty::from_token(&code.to_string()),
            DifficultyToken::Name(name) => Difficulty::from_token(&name),
        }
    }
}

impl From<String> for Difficulty {
    fn from(token: String) -> Self {
        Difficulty::from_token(&token)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move to play, `None` when the mover has no legal move
    pub best_move: Option<Pos>,
    /// Search score of the position for the mover
    pub score: i32,
    /// Depth the search ran with
    pub depth: Depth,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// The move came from the first-legal-move fallback, not the search
    pub fallback: bool,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, best_move: Option<Pos>, fallback: bool, time_ms: u64) -> Self {
        Self {
            best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            fallback,
        }
    }
}

/// Main AI Engine for Othello.
///
/// # Example
///
/// ```
/// use othello::{AIEngine, Board, Color, Difficulty, Pos};
///
/// let engine = AIEngine::with_difficulty(Difficulty::Medium);
/// let board = Board::new();
///
/// if let Some(pos) = engine.get_move(&board, Color::Black) {
///     println!("Play at ({}, {})", pos.row, pos.col);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    difficulty: Difficulty,
    node_budget: Option<u64>,
    stop: Option<Arc<AtomicBool>>,
}

impl AIEngine {
    /// Create an engine at `Easy` with no node budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            node_budget: config.node_budget,
            stop: None,
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Limit each search to roughly `budget` nodes (`None` for no limit).
    pub fn set_node_budget(&mut self, budget: Option<u64>) {
        self.node_budget = budget;
    }

    #[must_use]
    pub fn node_budget(&self) -> Option<u64> {
        self.node_budget
    }

    /// Cancel searches in progress when `flag` is set (`None` to detach).
    ///
    /// A cancelled search still returns a legal move when one exists.
    pub fn set_stop_flag(&mut self, flag: Option<Arc<AtomicBool>>) {
        self.stop = flag;
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` when `color` has no legal move (pass or game over).
    #[must_use]
    pub fn get_move(&self, board: &Board, color: Color) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// Runs the search at the configured depth. If the search yields no move
    /// the first legal move in row-major order is played instead; if there
    /// is none, the result carries no move.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let depth = self.difficulty.depth();

        let mut searcher = match self.node_budget {
            Some(budget) => Searcher::with_node_budget(budget),
            None => Searcher::new(),
        };
        if let Some(stop) = &self.stop {
            searcher = searcher.with_stop_flag(Arc::clone(stop));
        }
        let result = searcher.search(board, color, depth);

        let (best_move, fallback) = match result.best_move {
            Some(pos) => (Some(pos), false),
            None => {
                let first = legal_moves(board, color).first().copied();
                (first, first.is_some())
            }
        };

        if result.budget_exhausted {
            warn!(budget = ?self.node_budget, "node budget exhausted");
        }
        if result.stopped {
            debug!("search stopped before completion");
        }

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            color = color.token(),
            difficulty = %self.difficulty,
            %depth,
            nodes = result.nodes,
            score = result.score,
            best_move = ?best_move,
            fallback,
            time_ms,
            "search finished"
        );

        MoveResult::from_search(result, best_move, fallback, time_ms)
    }
}
