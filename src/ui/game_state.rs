//! Game state management for the Othello GUI
//!
//! Owns the session the engine knows nothing about: whose turn it is, pass
//! handling, game end, history and undo. Moves on both sides go through the
//! same `rules` functions the engine searches with.

use crate::rules::{
    apply_move, flipped_cells, has_legal_move, is_game_over, is_legal_move, legal_moves, outcome,
    Outcome,
};
use crate::{AIEngine, Board, Color, Difficulty, EngineConfig, MoveResult, Pos};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::info;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human_color: Color,
    },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Color::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        /// Set to abandon the search
        cancel: Arc<AtomicBool>,
        worker: JoinHandle<()>,
    },
}

/// One entry of the move history; `pos` is `None` for a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub color: Color,
    pub pos: Option<Pos>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub node_budget: Option<u64>,
    pub current_turn: Color,
    pub game_over: Option<Outcome>,
    pub last_move: Option<Pos>,
    pub last_flips: Vec<Pos>,
    pub history: Vec<Turn>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

pub(super) fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "Black",
        Color::White => "White",
    }
}

impl GameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            mode,
            difficulty,
            node_budget: None,
            current_turn: Color::Black,
            game_over: None,
            last_move: None,
            last_flips: Vec::new(),
            history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    /// Engine settings taken from a loaded config
    pub fn with_config(mode: GameMode, config: &EngineConfig) -> Self {
        let mut state = Self::new(mode, config.difficulty);
        state.node_budget = config.node_budget;
        state
    }

    pub fn reset(&mut self) {
        self.stop_ai();
        let node_budget = self.node_budget;
        *self = Self::new(self.mode, self.difficulty);
        self.node_budget = node_budget;
    }

    fn engine(&self, difficulty: Difficulty) -> AIEngine {
        let mut engine = AIEngine::with_difficulty(difficulty);
        engine.set_node_budget(self.node_budget);
        engine
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves to highlight for the side to move, empty unless a human is to move
    pub fn highlighted_moves(&self) -> Vec<Pos> {
        if self.game_over.is_some() || !self.is_human_turn() || self.is_ai_thinking() {
            return Vec::new();
        }
        legal_moves(&self.board, self.current_turn)
    }

    /// Attempt to place a piece at the given position
    pub fn try_place_piece(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_legal_move(&self.board, pos, self.current_turn) {
            return Err("Illegal move (must flip at least one piece)".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.last_flips = flipped_cells(&self.board, pos, color);
        self.board = apply_move(&self.board, pos, color);

        self.history.push(Turn { color, pos: Some(pos) });
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;

        self.move_timer.stop();
        self.advance_turn();
    }

    /// Hand the turn to the opponent, passing over a blocked side and
    /// detecting the end of the game.
    fn advance_turn(&mut self) {
        if is_game_over(&self.board) {
            let result = outcome(&self.board);
            info!(black = result.black, white = result.white, winner = ?result.winner, "game over");
            self.game_over = Some(result);
            return;
        }

        let next = self.current_turn.opponent();
        if has_legal_move(&self.board, next) {
            self.current_turn = next;
        } else {
            info!(color = next.token(), "no legal move, passing");
            self.history.push(Turn { color: next, pos: None });
            self.message = Some(format!("{} has no legal move and passes", color_name(next)));
        }

        self.move_timer.start();
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let color = self.current_turn;
        let cancel = Arc::new(AtomicBool::new(false));
        let mut engine = self.engine(self.difficulty);
        engine.set_stop_flag(Some(Arc::clone(&cancel)));

        let (tx, rx) = channel();

        let worker = thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            cancel,
            worker,
        };
    }

    /// Abandon a running search; the worker winds down on its own.
    ///
    /// Returns the worker handle so callers can wait for it.
    pub fn stop_ai(&mut self) -> Option<JoinHandle<()>> {
        match std::mem::replace(&mut self.ai_state, AiState::Idle) {
            AiState::Thinking { cancel, worker, .. } => {
                cancel.store(true, Ordering::Relaxed);
                info!("AI search cancelled");
                Some(worker)
            }
            AiState::Idle => None,
        }
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time, .. } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => self.execute_move(pos),
                None => {
                    let color = self.current_turn;
                    self.history.push(Turn { color, pos: None });
                    self.advance_turn();
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a move suggestion for the human to move
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        // Quick suggestion, independent of the opponent's difficulty
        let engine = self.engine(Difficulty::Easy);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo back to before the last human move
    pub fn undo(&mut self) {
        self.stop_ai();

        let human_color = match self.mode {
            GameMode::PvE { human_color } => Some(human_color),
            GameMode::PvP => None,
        };

        let Some(cut) = self.history.iter().rposition(|turn| {
            turn.pos.is_some() && human_color.map_or(true, |c| turn.color == c)
        }) else {
            return;
        };

        self.history.truncate(cut);
        self.replay();
    }

    /// Rebuild the board from the move history
    fn replay(&mut self) {
        let mut board = Board::new();
        let mut last_move = None;
        for turn in &self.history {
            if let Some(pos) = turn.pos {
                board = apply_move(&board, pos, turn.color);
                last_move = Some(pos);
            }
        }

        self.board = board;
        self.current_turn = self
            .history
            .last()
            .map_or(Color::Black, |turn| turn.color.opponent());
        self.game_over = None;
        self.last_move = last_move;
        self.last_flips.clear();
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

impl Drop for GameState {
    fn drop(&mut self) {
        self.stop_ai();
    }
}
