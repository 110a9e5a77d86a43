//! Win condition checking
//!
//! A player wins with a run of **exactly five** stones along one axis. An
//! overline of six or more does not count: this is the "exact five" Gomoku
//! variant, and `has_five_at` uses an equality check on purpose.

use crate::board::{Board, Pos, Stone};

use super::chain::{win_run, AXES};

/// Length of a winning run
pub const WIN_LENGTH: u8 = 5;

/// Check whether an exact five of `stone` passes through `pos`.
///
/// `pos` itself counts as one stone of the run whether or not it is already
/// on the board, so the turn loop can call this right after placing.
pub fn has_five_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    AXES.iter().any(|&(dx, dy)| {
        let length = 1 + win_run(board, pos, stone, dx, dy) + win_run(board, pos, stone, -dx, -dy);
        length == WIN_LENGTH
    })
}

/// Find the exact-five line through `pos`, ordered from one end to the other.
pub fn winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    for &(dx, dy) in &AXES {
        let back = win_run(board, pos, stone, -dx, -dy);
        let forward = win_run(board, pos, stone, dx, dy);
        if 1 + back + forward != WIN_LENGTH {
            continue;
        }

        let back = i32::from(back);
        let mut line = [pos; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            let step = i as i32 - back;
            *cell = pos.offset(dx * step, dy * step)?;
        }
        return Some(line);
    }
    None
}

/// Check for a winner anywhere on the board.
///
/// Scans every occupied cell with its own stone. Returns the first winner
/// found (Black is scanned first).
pub fn winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .find(|&(pos, stone)| has_five_at(board, pos, stone))
        .map(|(_, stone)| stone)
}

/// True if either side has an exact five on the board
#[inline]
pub fn has_any_five(board: &Board) -> bool {
    winner(board).is_some()
}
