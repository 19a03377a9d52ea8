//! Material evaluation

use crate::board::{Board, Color, TOTAL_CELLS};

/// Largest possible piece differential
pub const MAX_SCORE: i32 = TOTAL_CELLS as i32;

/// Evaluate the board from the perspective of the given color.
///
/// Returns `count(color) - count(opponent)`, always within
/// `[-MAX_SCORE, MAX_SCORE]`. Negating the color negates the score, which the
/// negamax search relies on.
#[must_use]
#[inline]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    board.count(color) as i32 - board.count(color.opponent()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos, BOARD_SIZE};
    use crate::rules::apply_move;

    #[test]
    fn test_start_position_is_even() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Color::Black), 0);
        assert_eq!(evaluate(&board, Color::White), 0);
    }

    #[test]
    fn test_after_opening_move() {
        let board = apply_move(&Board::new(), Pos::new(2, 3), Color::Black);
        assert_eq!(evaluate(&board, Color::Black), 3);
        assert_eq!(evaluate(&board, Color::White), -3);
    }

    #[test]
    fn test_full_board_differential() {
        let mut cells = [[Cell::White; BOARD_SIZE]; BOARD_SIZE];
        cells[0] = [Cell::Black; BOARD_SIZE];
        let board = Board::from_cells(cells);

        assert_eq!(evaluate(&board, Color::Black), 8 - 56);
        assert_eq!(evaluate(&board, Color::White), 56 - 8);
    }

    #[test]
    fn test_bounds() {
        let board = Board::from_cells([[Cell::Black; BOARD_SIZE]; BOARD_SIZE]);
        assert_eq!(evaluate(&board, Color::Black), MAX_SCORE);
        assert_eq!(evaluate(&board, Color::White), -MAX_SCORE);
    }
}
