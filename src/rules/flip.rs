//! Move application: placement plus flips
//!
//! Each of the 8 directions is resolved independently. A direction flips its
//! run of opponent pieces only when the run is closed by a piece of the
//! mover's color; runs ending on an empty cell or the edge flip nothing.

use crate::board::{Board, Cell, Color, Pos, DIRECTIONS};

use super::moves::bracket_len;

/// Cells that would change color if `color` played at `pos`.
///
/// Ordered by direction (as in [`DIRECTIONS`]), then outward from `pos`.
pub fn flipped_cells(board: &Board, pos: Pos, color: Color) -> Vec<Pos> {
    let mut flipped = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        let len = bracket_len(board, pos, color, dr, dc);
        let mut cursor = pos;
        for _ in 0..len {
            // bracket_len only counts on-board cells
            if let Some(next) = cursor.offset(dr, dc) {
                flipped.push(next);
                cursor = next;
            }
        }
    }
    flipped
}

/// Play `color` at `pos`, returning the resulting board.
///
/// The move is expected to be legal (see [`super::is_legal_move`]); it is not
/// re-validated. The input board is never modified.
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, color: Color) -> Board {
    let own = Cell::from(color);
    let mut next = *board;
    next.set(pos, own);

    for &(dr, dc) in &DIRECTIONS {
        let len = bracket_len(board, pos, color, dr, dc);
        let mut cursor = pos;
        for _ in 0..len {
            if let Some(step) = cursor.offset(dr, dc) {
                next.set(step, own);
                cursor = step;
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_single_flip_along_top_row() {
        let b = board(
            ".WB.....
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(legal_moves(&b, Color::Black), vec![Pos::new(0, 0)]);

        let next = apply_move(&b, Pos::new(0, 0), Color::Black);
        assert_eq!(next.get(Pos::new(0, 0)), Cell::Black);
        assert_eq!(next.get(Pos::new(0, 1)), Cell::Black);
        assert_eq!(next.get(Pos::new(0, 2)), Cell::Black);
        assert_eq!(next.count(Color::Black), 3);
        assert_eq!(next.count(Color::White), 0);
    }

    #[test]
    fn test_input_board_untouched() {
        let b = Board::new();
        let next = apply_move(&b, Pos::new(2, 3), Color::Black);

        assert_eq!(b, Board::new());
        assert_eq!(next.get(Pos::new(2, 3)), Cell::Black);
        assert_eq!(next.get(Pos::new(3, 3)), Cell::Black);
        assert_eq!(next.count(Color::Black), 4);
        assert_eq!(next.count(Color::White), 1);
    }

    #[test]
    fn test_flips_accumulate_across_directions() {
        // Each probe closes exactly one direction
        let b = board(
            "........
             ........
             ........
             ...WWB..
             ...WW...
             ...B.B..
             ........
             ........",
        );
        let pos = Pos::new(3, 2);
        assert!(b.is_empty(pos));
        let flips = flipped_cells(&b, pos, Color::Black);
        // east closes on (3,5); south-east runs into the empty (5,4)
        assert_eq!(flips, vec![Pos::new(3, 3), Pos::new(3, 4)]);

        let pos = Pos::new(2, 2);
        let flips = flipped_cells(&b, pos, Color::Black);
        // south-east: (3,3),(4,4) then B at (5,5)
        assert_eq!(flips, vec![Pos::new(3, 3), Pos::new(4, 4)]);

        let pos = Pos::new(2, 3);
        let flips = flipped_cells(&b, pos, Color::Black);
        // south: (3,3),(4,3) then B at (5,3)
        assert_eq!(flips, vec![Pos::new(3, 3), Pos::new(4, 3)]);
    }

    #[test]
    fn test_multi_direction_apply() {
        // White ring around (3,3) with a black anchor behind every direction
        let b = board(
            "........
             .B.B.B..
             ..WWW...
             .BW.WB..
             ..WWW...
             .B.B.B..
             ........
             ........",
        );
        let pos = Pos::new(3, 3);
        let flips = flipped_cells(&b, pos, Color::Black);
        assert_eq!(flips.len(), 8);

        let next = apply_move(&b, pos, Color::Black);
        assert_eq!(next.count(Color::White), 0);
        assert_eq!(
            next.count(Color::Black),
            b.count(Color::Black) + 1 + flips.len() as u32
        );
    }

    #[test]
    fn test_unclosed_direction_flips_nothing() {
        let b = board(
            "........
             ........
             ........
             ..BWW.W.
             ........
             ........
             ........
             ........",
        );
        // from (3,5) going west closes on (3,2); going east the W at (3,6) runs to empty
        let flips = flipped_cells(&b, Pos::new(3, 5), Color::Black);
        assert_eq!(flips, vec![Pos::new(3, 4), Pos::new(3, 3)]);
        let next = apply_move(&b, Pos::new(3, 5), Color::Black);
        assert_eq!(next.get(Pos::new(3, 6)), Cell::White);
    }
}
