//! Property tests over positions reached by random legal play.

use proptest::prelude::*;

use crate::board::{Board, Color, Pos};
use crate::engine::{AIEngine, Difficulty};
use crate::eval::evaluate;
use crate::rules::{apply_move, flipped_cells, is_game_over, is_legal_move, legal_moves};
use crate::search::{Depth, Searcher};

/// Play from the start position, picking `choices[i] % moves.len()` at each
/// turn and passing when the side to move is blocked.
fn play_out(choices: &[usize]) -> (Board, Color) {
    let mut board = Board::new();
    let mut color = Color::Black;
    for &choice in choices {
        if is_game_over(&board) {
            break;
        }
        let moves = legal_moves(&board, color);
        if !moves.is_empty() {
            board = apply_move(&board, moves[choice % moves.len()], color);
        }
        color = color.opponent();
    }
    (board, color)
}

fn reachable_position() -> impl Strategy<Value = (Board, Color)> {
    prop::collection::vec(0usize..64, 0..60).prop_map(|choices| play_out(&choices))
}

/// Minimax value without pruning, same leaf rules as the searcher
fn minimax(board: &Board, color: Color, depth: u32) -> i32 {
    if depth == 0 {
        return evaluate(board, color);
    }
    let moves = legal_moves(board, color);
    if moves.is_empty() {
        return evaluate(board, color);
    }
    moves
        .into_iter()
        .map(|mv| -minimax(&apply_move(board, mv, color), color.opponent(), depth - 1))
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Generated moves are exactly the empty cells that pass the legality test
    #[test]
    fn prop_legal_moves_are_empty_and_legal((board, color) in reachable_position()) {
        let moves = legal_moves(&board, color);
        for pos in Pos::all() {
            let listed = moves.contains(&pos);
            prop_assert_eq!(listed, is_legal_move(&board, pos, color));
            if listed {
                prop_assert!(board.is_empty(pos), "occupied cell {:?} listed", pos);
            }
        }
        prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    /// Pieces only convert: mover gains 1 + flips, opponent loses flips
    #[test]
    fn prop_apply_conserves_pieces((board, color) in reachable_position()) {
        let opponent = color.opponent();
        for mv in legal_moves(&board, color) {
            let flipped = flipped_cells(&board, mv, color).len() as u32;
            let next = apply_move(&board, mv, color);

            prop_assert!(flipped > 0);
            prop_assert_eq!(next.count(color), board.count(color) + 1 + flipped);
            prop_assert_eq!(next.count(opponent), board.count(opponent) - flipped);
            prop_assert_eq!(next.piece_count(), board.piece_count() + 1);
        }
    }

    #[test]
    fn prop_evaluation_is_antisymmetric((board, _) in reachable_position()) {
        prop_assert_eq!(evaluate(&board, Color::Black), -evaluate(&board, Color::White));
    }

    #[test]
    fn prop_depth_zero_is_evaluation((board, color) in reachable_position()) {
        let result = Searcher::new().search(&board, color, Depth::Bounded(0));
        prop_assert_eq!(result.score, evaluate(&board, color));
        prop_assert_eq!(result.best_move, None);
    }

    /// Pruning never changes the root value
    #[test]
    fn prop_alphabeta_matches_minimax((board, color) in reachable_position(), depth in 1u32..=3) {
        let result = Searcher::new().search(&board, color, Depth::Bounded(depth));
        prop_assert_eq!(result.score, minimax(&board, color, depth));
    }

    /// The engine only returns legal moves, and returns none only when there are none
    #[test]
    fn prop_engine_move_is_legal((board, color) in reachable_position()) {
        let engine = AIEngine::with_difficulty(Difficulty::Easy);
        let moves = legal_moves(&board, color);
        match engine.get_move(&board, color) {
            Some(mv) => prop_assert!(moves.contains(&mv)),
            None => prop_assert!(moves.is_empty()),
        }
    }

    #[test]
    fn prop_engine_is_deterministic((board, color) in reachable_position()) {
        let engine = AIEngine::with_difficulty(Difficulty::Easy);
        let first = engine.get_move_with_stats(&board, color);
        let second = engine.get_move_with_stats(&board, color);
        prop_assert_eq!(first.best_move, second.best_move);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.nodes, second.nodes);
    }
}
