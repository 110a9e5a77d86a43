//! Candidate move generation
//!
//! Every empty cell is scored with [`score_move`], sorted best first, and
//! pruned: once any cell has a positive score, neutral cells are dropped so
//! the depth budget goes to threats and opportunities.

use crate::board::{Board, Pos, Stone};
use crate::eval::score_move;

/// An empty cell with its ordering score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Pos,
    pub score: i32,
}

/// Generate ordered candidate moves for `stone`.
///
/// Cells are enumerated column by column; the sort is stable, so that order
/// decides ties. The returned list is owned by the caller.
#[must_use]
pub fn generate_candidates(board: &Board, stone: Stone) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = board
        .empty_cells()
        .map(|pos| Candidate {
            pos,
            score: score_move(board, pos, stone),
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    prune(&mut candidates);
    candidates
}

/// Keep only positive candidates when there is at least one.
///
/// Expects `candidates` sorted by descending score.
fn prune(candidates: &mut Vec<Candidate>) {
    if candidates.first().is_some_and(|c| c.score > 0) {
        candidates.retain(|c| c.score > 0);
    }
}
