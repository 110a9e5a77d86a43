//! Candidate cell scoring for move ordering
//!
//! A cell is worth playing when it extends the mover's own chains (offense)
//! or sits at the end of an opponent chain (defense). Both parts read the
//! tables in [`super::patterns`].

use crate::board::{Board, Pos, Stone};
use crate::rules::{axis_chain, chain_run, AXES, DIRECTIONS};

use super::patterns::{defense_bonus, offense_bonus};

/// Score an empty cell for `stone` about to move there.
#[must_use]
pub fn score_move(board: &Board, pos: Pos, stone: Stone) -> i32 {
    offense_score(board, pos, stone) + defense_score(board, pos, stone)
}

/// Value of the chains `stone` would form through `pos`, per axis.
#[must_use]
pub fn offense_score(board: &Board, pos: Pos, stone: Stone) -> i32 {
    AXES.iter()
        .map(|&axis| axis_chain(board, pos, stone, axis))
        .filter(|chain| chain.length > 0)
        .map(|chain| offense_bonus(chain.length, chain.open_edges, chain.closed_edges()))
        .sum()
}

/// Value of blocking opponent runs that end next to `pos`.
///
/// Each of the eight half-directions is scored on its own, so a cell between
/// two opponent runs on the same line collects both bonuses.
#[must_use]
pub fn defense_score(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let opponent = stone.opponent();

    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| chain_run(board, pos, opponent, dx, dy))
        .filter(|run| run.length > 0)
        .map(|run| defense_bonus(run.length, 2 - u8::from(run.open)))
        .sum()
}
