//! Negamax search with alpha-beta pruning
//!
//! Every call scores the position from the side to move; the caller negates
//! the child's score to get its own view. Moves are tried in generation
//! (row-major) order with no reordering and no transposition table.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color};
//! use othello::search::{Depth, Searcher};
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Color::Black, Depth::Bounded(3));
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Color, Pos};
use crate::eval::{evaluate, MAX_SCORE};
use crate::rules::{apply_move, legal_moves};

/// Infinity score for alpha-beta bounds, outside any reachable evaluation
pub const INF: i32 = MAX_SCORE + 1;

/// Remaining search depth.
///
/// `Unbounded` is never decremented; such a search only stops at positions
/// where the side to move has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Bounded(u32),
    Unbounded,
}

impl Depth {
    /// No plies left to search
    #[inline]
    pub fn is_exhausted(self) -> bool {
        matches!(self, Depth::Bounded(0))
    }

    /// Depth for the child frame
    #[inline]
    pub fn next(self) -> Depth {
        match self {
            Depth::Bounded(n) => Depth::Bounded(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Bounded(n) => write!(f, "{n}"),
            Depth::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the root position for the side to move
    pub score: i32,
    /// Depth the search was started with
    pub depth: Depth,
    /// Total nodes visited
    pub nodes: u64,
    /// Whether the node budget cut the search short
    pub budget_exhausted: bool,
    /// Whether the stop flag cut the search short
    pub stopped: bool,
}

/// Depth-bounded negamax searcher.
///
/// Holds only per-search counters; nothing carries over between searches,
/// so two searches of the same position always agree.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
    node_budget: Option<u64>,
    budget_exhausted: bool,
    stop: Option<Arc<AtomicBool>>,
    stopped: bool,
}

impl Searcher {
    /// Create a searcher with no node budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher that expands at most `budget` nodes.
    ///
    /// The root counts as node 1. Every node visited after the first
    /// `budget` is scored with the evaluator instead of being expanded, so
    /// `nodes` in the result can exceed the budget by the leaves already
    /// queued in open move loops. The cut is count-based, so results stay
    /// deterministic.
    #[must_use]
    pub fn with_node_budget(budget: u64) -> Self {
        Self {
            node_budget: Some(budget),
            ..Self::default()
        }
    }

    /// Abort the search once `flag` is set.
    ///
    /// Remaining nodes are scored as leaves, the same way as an exhausted
    /// budget, and the result reports `stopped`.
    #[must_use]
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    /// Search `board` for `color` with a full window.
    pub fn search(&mut self, board: &Board, color: Color, depth: Depth) -> SearchResult {
        self.nodes = 0;
        self.budget_exhausted = false;
        self.stopped = false;

        let (score, best_move) = self.negamax(board, color, depth, -INF, INF);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            budget_exhausted: self.budget_exhausted,
            stopped: self.stopped,
        }
    }

    /// Negamax with alpha-beta pruning (fail-hard).
    ///
    /// Returns the score for `color` and the move that raised alpha, if any
    /// move did.
    pub fn negamax(
        &mut self,
        board: &Board,
        color: Color,
        depth: Depth,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth.is_exhausted() || self.should_stop() {
            return (evaluate(board, color), None);
        }

        // No moves means game over or a pass; both are scored as a leaf
        // for the side to move.
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return (evaluate(board, color), None);
        }

        let opponent = color.opponent();
        let child_depth = depth.next();
        let mut best_move = None;

        for mv in moves {
            let child = apply_move(board, mv, color);
            let (child_score, _) = self.negamax(&child, opponent, child_depth, -beta, -alpha);
            let score = -child_score;

            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }

            if alpha >= beta {
                break;
            }
        }

        (alpha, best_move)
    }

    /// Nodes visited by the last search
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Budget spent or stop requested; `nodes` already includes this node
    #[inline]
    fn should_stop(&mut self) -> bool {
        if let Some(stop) = &self.stop {
            if stop.load(Ordering::Relaxed) {
                self.stopped = true;
                return true;
            }
        }
        match self.node_budget {
            Some(budget) if self.nodes > budget => {
                self.budget_exhausted = true;
                true
            }
            _ => false,
        }
    }
}
