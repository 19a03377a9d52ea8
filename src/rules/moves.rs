//! Legal move generation
//!
//! A placement is legal when it lands on an empty cell and, in at least one
//! of the 8 directions, the adjacent cells form a run of one or more opponent
//! pieces closed off by a piece of the mover's own color.

use crate::board::{Board, Cell, Color, Pos, DIRECTIONS};

/// Length of the opponent run that `color` would bracket by playing at `pos`
/// in direction `(dr, dc)`. Zero when the run is empty, runs off the board, or
/// ends on an empty cell.
#[inline]
pub(crate) fn bracket_len(board: &Board, pos: Pos, color: Color, dr: i8, dc: i8) -> usize {
    let own = Cell::from(color);
    let opponent = Cell::from(color.opponent());

    let mut len = 0;
    let mut cursor = pos;
    loop {
        cursor = match cursor.offset(dr, dc) {
            Some(next) => next,
            None => return 0,
        };
        match board.get(cursor) {
            cell if cell == opponent => len += 1,
            cell if cell == own => return len,
            _ => return 0,
        }
    }
}

/// Check whether `color` may place a piece at `pos`.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, color: Color) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| bracket_len(board, pos, color, dr, dc) > 0)
}

/// All legal moves for `color`, in row-major order.
///
/// An empty result means `color` has to pass.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Pos> {
    Pos::all()
        .filter(|&pos| is_legal_move(board, pos, color))
        .collect()
}

/// Check whether `color` has at least one legal move.
#[inline]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Pos::all().any(|pos| is_legal_move(board, pos, color))
}

/// Number of legal moves available to `color`.
pub fn mobility(board: &Board, color: Color) -> usize {
    Pos::all()
        .filter(|&pos| is_legal_move(board, pos, color))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_opening_moves_black() {
        let moves = legal_moves(&Board::new(), Color::Black);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 3),
                Pos::new(3, 2),
                Pos::new(4, 5),
                Pos::new(5, 4)
            ]
        );
    }

    #[test]
    fn test_opening_moves_white() {
        let moves = legal_moves(&Board::new(), Color::White);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 4),
                Pos::new(3, 5),
                Pos::new(4, 2),
                Pos::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_occupied_cell_never_legal() {
        let b = Board::new();
        assert!(!is_legal_move(&b, Pos::new(3, 3), Color::Black));
        assert!(!is_legal_move(&b, Pos::new(3, 4), Color::White));
    }

    #[test]
    fn test_run_must_be_closed_by_own_piece() {
        // W W at (0,1),(0,2) with nothing behind: not legal for Black at (0,0)
        let b = board(
            ".WW.....
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert!(!is_legal_move(&b, Pos::new(0, 0), Color::Black));

        let b = b.with_cell(Pos::new(0, 3), Cell::Black);
        assert!(is_legal_move(&b, Pos::new(0, 0), Color::Black));
        assert_eq!(bracket_len(&b, Pos::new(0, 0), Color::Black, 0, 1), 2);
    }

    #[test]
    fn test_adjacent_own_piece_is_not_a_bracket() {
        let b = board(
            ".B......
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(bracket_len(&b, Pos::new(0, 0), Color::Black, 0, 1), 0);
        assert!(!is_legal_move(&b, Pos::new(0, 0), Color::Black));
    }

    #[test]
    fn test_run_off_the_edge_is_not_a_bracket() {
        let b = board(
            "....BWWW
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(bracket_len(&b, Pos::new(0, 4), Color::Black, 0, 1), 0);
        assert!(legal_moves(&b, Color::Black).is_empty());
    }

    #[test]
    fn test_diagonal_bracket() {
        let b = board(
            "........
             .W......
             ..B.....
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(legal_moves(&b, Color::Black), vec![Pos::new(0, 0)]);
        assert_eq!(legal_moves(&b, Color::White), vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_mobility_and_has_legal_move() {
        let b = Board::new();
        assert_eq!(mobility(&b, Color::Black), 4);
        assert!(has_legal_move(&b, Color::White));

        let empty = Board::empty();
        assert_eq!(mobility(&empty, Color::Black), 0);
        assert!(!has_legal_move(&empty, Color::Black));
    }
}
