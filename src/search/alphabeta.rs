//! Minimax search with alpha-beta pruning
//!
//! The search works on a single board that it mutates and restores in place.
//! Every speculative stone is held in a [`PlacedStone`](crate::board::PlacedStone)
//! guard, so the stone is taken back on every exit path, including pruning
//! breaks.
//!
//! # Leaf perspective
//!
//! A leaf is scored for the side chosen by its parent: children of a
//! maximising node are scored for the mover, children of a minimising node
//! for the opponent. The root hands the full effective depth to its child,
//! so with an even depth the depth limit is always reached right after one
//! of the mover's replies.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(4, 4), Stone::Black);
//! board.place(Pos::new(5, 4), Stone::White);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Stone::Black, Stone::White, 2);
//! assert!(result.best_move.is_some());
//! ```

use log::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::has_any_five;

use super::movegen::generate_candidates;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i32,
    /// Effective depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// The two sides of a search
#[derive(Debug, Clone, Copy)]
struct Sides {
    mover: Stone,
    opponent: Stone,
}

/// Depth-limited minimax searcher with alpha-beta pruning.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for the mover's best move.
    ///
    /// The effective depth is `min(moves_left, max_depth)`. Each candidate is
    /// placed, searched as a minimising node, and taken back; the candidate
    /// with the strictly greatest value wins, so the first one seen wins ties.
    ///
    /// The board is identical before and after the call.
    pub fn search(
        &mut self,
        board: &mut Board,
        mover: Stone,
        opponent: Stone,
        max_depth: u8,
    ) -> SearchResult {
        self.nodes = 0;

        let depth = board.moves_left().min(usize::from(max_depth)) as u8;
        let sides = Sides { mover, opponent };

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for candidate in generate_candidates(board, mover) {
            let Some(mut placed) = board.place_scoped(candidate.pos, mover) else {
                continue;
            };

            // A child that cannot beat the best so far only needs to prove it,
            // so the running best is passed down as alpha.
            let score = self.minimax(&mut placed, depth, best_score, i32::MAX, false, sides, mover);
            trace!(
                "root candidate {} (order score {}) -> {}",
                candidate.pos,
                candidate.score,
                score
            );

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(candidate.pos);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Returns the static value for `side_to_score` at the depth limit, when
    /// a five is on the board, or when no candidate is left.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        sides: Sides,
        side_to_score: Stone,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || has_any_five(board) {
            return evaluate(board, side_to_score);
        }

        let stone = if maximizing { sides.mover } else { sides.opponent };
        let candidates = generate_candidates(board, stone);
        if candidates.is_empty() {
            return evaluate(board, side_to_score);
        }

        if maximizing {
            let mut value = i32::MIN;
            for candidate in candidates {
                let Some(mut placed) = board.place_scoped(candidate.pos, stone) else {
                    continue;
                };
                let score =
                    self.minimax(&mut placed, depth - 1, alpha, beta, false, sides, sides.mover);

                value = value.max(score);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for candidate in candidates {
                let Some(mut placed) = board.place_scoped(candidate.pos, stone) else {
                    continue;
                };
                let score =
                    self.minimax(&mut placed, depth - 1, alpha, beta, true, sides, sides.opponent);

                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(x, y, s) in stones {
            assert!(board.place(Pos::new(x, y), s));
        }
        board
    }

    /// Unpruned minimax over the same candidates, for comparison.
    fn plain_minimax(
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        sides: Sides,
        side_to_score: Stone,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 || has_any_five(board) {
            return evaluate(board, side_to_score);
        }
        let stone = if maximizing { sides.mover } else { sides.opponent };
        let candidates = generate_candidates(board, stone);
        if candidates.is_empty() {
            return evaluate(board, side_to_score);
        }

        let next_side = if maximizing { sides.mover } else { sides.opponent };
        let mut scores = Vec::with_capacity(candidates.len());
        for c in candidates {
            let mut placed = board.place_scoped(c.pos, stone).unwrap();
            scores.push(plain_minimax(&mut placed, depth - 1, !maximizing, sides, next_side, nodes));
        }
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn plain_search(board: &mut Board, mover: Stone, max_depth: u8) -> (Option<Pos>, i32, u64) {
        let sides = Sides {
            mover,
            opponent: mover.opponent(),
        };
        let depth = board.moves_left().min(usize::from(max_depth)) as u8;
        let mut nodes = 0;
        let mut best = None;
        let mut best_score = i32::MIN;
        for c in generate_candidates(board, mover) {
            let mut placed = board.place_scoped(c.pos, mover).unwrap();
            let score = plain_minimax(&mut placed, depth, false, sides, mover, &mut nodes);
            if best.is_none() || score > best_score {
                best = Some(c.pos);
                best_score = score;
            }
        }
        (best, best_score, nodes)
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = board_with(&[
            (6, 0, Stone::Black),
            (6, 1, Stone::Black),
            (6, 2, Stone::Black),
            (6, 3, Stone::Black),
            (0, 8, Stone::White),
        ]);
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Stone::Black, Stone::White, 2);
        assert_eq!(result.best_move, Some(Pos::new(6, 4)));
        assert!(result.score >= 250_000);
    }

    #[test]
    fn test_search_blocks_open_four() {
        let mut board = board_with(&[
            (2, 4, Stone::White),
            (3, 4, Stone::White),
            (4, 4, Stone::White),
            (5, 4, Stone::White),
            (7, 7, Stone::Black),
        ]);
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Stone::Black, Stone::White, 2);
        let mv = result.best_move.unwrap();
        assert!(mv == Pos::new(1, 4) || mv == Pos::new(6, 4), "played {}", mv);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = board_with(&[
            (4, 4, Stone::Black),
            (5, 5, Stone::White),
            (3, 5, Stone::Black),
        ]);
        let before = board.clone();
        let mut searcher = Searcher::new();
        let _ = searcher.search(&mut board, Stone::White, Stone::Black, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        let positions: [&[(u8, u8, Stone)]; 3] = [
            &[(4, 4, Stone::Black), (5, 4, Stone::White), (4, 5, Stone::Black)],
            &[
                (2, 2, Stone::White),
                (3, 3, Stone::White),
                (4, 3, Stone::Black),
                (4, 4, Stone::Black),
            ],
            &[(0, 0, Stone::Black), (8, 8, Stone::White)],
        ];

        for stones in positions {
            for mover in [Stone::Black, Stone::White] {
                let mut board = board_with(stones);
                let (plain_move, plain_score, plain_nodes) = plain_search(&mut board, mover, 2);

                let mut searcher = Searcher::new();
                let result = searcher.search(&mut board, mover, mover.opponent(), 2);

                assert_eq!(result.best_move, plain_move, "{:?} on {:?}", mover, stones);
                assert_eq!(result.score, plain_score, "{:?} on {:?}", mover, stones);
                assert!(result.nodes <= plain_nodes);
            }
        }
    }

    #[test]
    fn test_alpha_beta_prunes_something() {
        let mut board = board_with(&[
            (4, 4, Stone::Black),
            (5, 4, Stone::White),
            (4, 5, Stone::Black),
        ]);
        let (_, _, plain_nodes) = plain_search(&mut board, Stone::White, 2);
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Stone::White, Stone::Black, 2);
        assert!(result.nodes < plain_nodes);
    }

    #[test]
    fn test_effective_depth_capped_by_moves_left() {
        // 5x5 board with three empty cells, none completing a five
        let mut board = Board::with_size(5).unwrap();
        let fill = [
            "BWBWB", //
            "BWBWB", //
            "WBWBW", //
            "WB...", //
            "BWBWB",
        ];
        for (y, row) in fill.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if let Some(stone) = Stone::from_symbol(c) {
                    board.place(Pos::new(x as u8, y as u8), stone);
                }
            }
        }
        assert_eq!(board.moves_left(), 3);

        let before = board.clone();
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Stone::Black, Stone::White, 6);
        assert_eq!(result.depth, 3);
        let mv = result.best_move.unwrap();
        assert_eq!(mv.y, 3);
        assert!(mv.x >= 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::with_size(5).unwrap();
        let snapshot = board.clone();
        for (i, pos) in snapshot.empty_cells().enumerate() {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(pos, stone);
        }
        assert!(board.is_full());

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Stone::Black, Stone::White, 6);
        assert_eq!(result.best_move, None);
        assert_eq!(result.depth, 0);
    }
}
