//! End-of-game detection and scoring

use crate::board::{Board, Color};

use super::moves::has_legal_move;

/// The game is over when neither color has a legal move.
///
/// A full board is one case of this; a board where both sides are blocked
/// before it fills up is another.
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Color::Black) && !has_legal_move(board, Color::White)
}

/// Final piece counts and winner of a finished (or abandoned) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub black: u32,
    pub white: u32,
    /// `None` on a draw
    pub winner: Option<Color>,
}

impl Outcome {
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Pieces held by `color`
    pub fn score(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Count pieces and decide the winner by majority.
pub fn outcome(board: &Board) -> Outcome {
    let black = board.count(Color::Black);
    let white = board.count(Color::White);
    let winner = match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Color::Black),
        std::cmp::Ordering::Less => Some(Color::White),
        std::cmp::Ordering::Equal => None,
    };
    Outcome {
        black,
        white,
        winner,
    }
}
