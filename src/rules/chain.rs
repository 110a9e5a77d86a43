//! Chain walks along board directions
//!
//! A walk starts next to a reference cell and steps by `(dx, dy)` while the
//! cells hold the walked stone. The reference cell itself is never read, so
//! the same walk scores an empty candidate cell (as if the stone were about to
//! be placed there) and a stone that is already on the board.

use crate::board::{Board, Pos, Stone};

/// One half-direction per axis: ↖-↘, ↑-↓, ↗-↙, →-←.
/// The opposite half of each axis is the negated vector.
pub const AXES: [(i32, i32); 4] = [
    (-1, -1), // Diagonal
    (0, -1),  // Vertical
    (1, -1),  // Anti-diagonal
    (1, 0),   // Horizontal
];

/// All eight half-directions around a cell
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Result of walking a single half-direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainRun {
    /// Stones in the run, excluding the reference cell
    pub length: u8,
    /// Cell just past the run is empty
    pub open: bool,
}

/// Combined result of both halves of an axis, counting the reference cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisChain {
    pub length: u8,
    /// Open ends, 0..=2
    pub open_edges: u8,
}

impl AxisChain {
    #[inline]
    pub fn closed_edges(self) -> u8 {
        2 - self.open_edges
    }
}

/// Count consecutive `stone` cells strictly beyond `pos` in one direction.
#[inline]
pub fn win_run(board: &Board, pos: Pos, stone: Stone, dx: i32, dy: i32) -> u8 {
    chain_run(board, pos, stone, dx, dy).length
}

/// Walk one direction from `pos` and classify the cell past the run.
///
/// The edge is open when that cell is empty, closed when it is off the board
/// or holds the other stone.
pub fn chain_run(board: &Board, pos: Pos, stone: Stone, dx: i32, dy: i32) -> ChainRun {
    let mut x = i32::from(pos.x) + dx;
    let mut y = i32::from(pos.y) + dy;
    let mut length = 0u8;

    loop {
        match board.stone_at(x, y) {
            Some(s) if s == stone => {
                length += 1;
                x += dx;
                y += dy;
            }
            Some(Stone::Empty) => return ChainRun { length, open: true },
            // Off the board or blocked by the other color
            _ => return ChainRun { length, open: false },
        }
    }
}

/// Chain through `pos` along one axis, `pos` counted as part of it.
#[inline]
pub fn axis_chain(board: &Board, pos: Pos, stone: Stone, axis: (i32, i32)) -> AxisChain {
    let (dx, dy) = axis;
    let forward = chain_run(board, pos, stone, dx, dy);
    let backward = chain_run(board, pos, stone, -dx, -dy);

    AxisChain {
        length: 1 + forward.length + backward.length,
        open_edges: u8::from(forward.open) + u8::from(backward.open),
    }
}
