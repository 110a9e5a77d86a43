//! Static evaluation of board positions
//!
//! Used at the leaves of the minimax search. Every stone contributes, per
//! axis, a weighted term for the chain it belongs to:
//!
//! ```text
//! weight[length - 1][open_edges] * length * (open_edges + 1)
//! ```
//!
//! A chain is counted once from each of its stones, so longer chains weigh
//! in proportionally more.

use crate::board::{Board, Stone};
use crate::rules::{axis_chain, AXES};

use super::patterns::weight;

/// Evaluate the board from the perspective of `color`.
///
/// Returns `own - 1.5 * opponent`, truncated toward zero.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let own = evaluate_side(board, color);
    let opp = evaluate_side(board, color.opponent());

    // (2 * own - 3 * opp) / 2 == own - 1.5 * opp, integer division truncates toward zero
    (2 * own - 3 * opp) / 2
}

/// Sum of weighted chain terms over every stone of `color`.
///
/// Axes where the combined chain is longer than five are skipped.
#[must_use]
pub fn evaluate_side(board: &Board, color: Stone) -> i32 {
    let mut total = 0;

    for pos in board.stones(color) {
        for &axis in &AXES {
            let chain = axis_chain(board, pos, color, axis);
            let Some(w) = weight(chain.length, chain.open_edges) else {
                continue;
            };
            total += w * i32::from(chain.length) * (i32::from(chain.open_edges) + 1);
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(x, y, s) in stones {
            assert!(board.place(Pos::new(x, y), s));
        }
        board
    }

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black), 0);
        assert_eq!(evaluate(&board, Stone::White), 0);
    }

    #[test]
    fn test_single_stone_is_zero() {
        let board = board_with(&[(4, 4, Stone::Black)]);
        assert_eq!(evaluate_side(&board, Stone::Black), 0);
    }

    #[test]
    fn test_open_two() {
        // Each stone: horizontal open two -> 3 * 2 * 3 = 18, other axes singletons
        let board = board_with(&[(3, 4, Stone::Black), (4, 4, Stone::Black)]);
        assert_eq!(evaluate_side(&board, Stone::Black), 36);
        assert_eq!(evaluate(&board, Stone::Black), 36);
        assert_eq!(evaluate(&board, Stone::White), -54);
    }

    #[test]
    fn test_closed_three_against_edge() {
        // Three stones from the edge: open_edges = 1 -> 10 * 3 * 2 = 60 each
        let board = board_with(&[
            (0, 0, Stone::White),
            (1, 0, Stone::White),
            (2, 0, Stone::White),
        ]);
        assert_eq!(evaluate_side(&board, Stone::White), 180);
    }

    #[test]
    fn test_five_dominates() {
        let board = board_with(&[
            (0, 8, Stone::Black),
            (1, 8, Stone::Black),
            (2, 8, Stone::Black),
            (3, 8, Stone::Black),
            (4, 8, Stone::Black),
        ]);
        // 5 stones * 5000 * 5 * (1 open + 1)
        assert_eq!(evaluate_side(&board, Stone::Black), 250_000);
    }

    #[test]
    fn test_overline_axis_skipped() {
        let board = board_with(&[
            (0, 8, Stone::Black),
            (1, 8, Stone::Black),
            (2, 8, Stone::Black),
            (3, 8, Stone::Black),
            (4, 8, Stone::Black),
            (5, 8, Stone::Black),
        ]);
        assert_eq!(evaluate_side(&board, Stone::Black), 0);
    }

    #[test]
    fn test_opponent_weighted_one_and_half() {
        // White open two scores 36; Black side 0 -> -54 for Black
        let board = board_with(&[(0, 4, Stone::Black), (3, 4, Stone::White), (4, 4, Stone::White)]);
        assert_eq!(evaluate_side(&board, Stone::White), 36);
        assert_eq!(evaluate(&board, Stone::Black), -54);
    }

    #[test]
    fn test_fractional_result_truncates_toward_zero() {
        // Dead White three (edge and a Black stone): 5 * 3 * 1 = 15 per stone
        let board = board_with(&[
            (0, 0, Stone::White),
            (1, 0, Stone::White),
            (2, 0, Stone::White),
            (3, 0, Stone::Black),
        ]);
        assert_eq!(evaluate_side(&board, Stone::White), 45);
        assert_eq!(evaluate_side(&board, Stone::Black), 0);
        // 0 - 67.5
        assert_eq!(evaluate(&board, Stone::Black), -67);
        assert_eq!(evaluate(&board, Stone::White), 45);
    }
}
