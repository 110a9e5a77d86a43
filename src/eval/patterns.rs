//! Scoring tables for Gomoku evaluation
//!
//! Three immutable tables drive all heuristics:
//! - offense: bonus for extending the mover's own chain through a cell
//! - defense: bonus for blocking an opponent chain at a cell
//! - weights: per-stone multiplier used by the static evaluation
//!
//! Keys missing from a table score zero.

/// Offense bonus indexed `[chain_length][open_edges]`.
///
/// The closed edge count is implied (`2 - open_edges`), so `(length, open)`
/// identifies a `(length, open, closed)` entry uniquely.
pub const OFFENSE: [[i32; 3]; 6] = [
    [0, 0, 0],                         // 0
    [0, 0, 0],                         // 1
    [0, 50, 100],                      // 2
    [0, 500, 2_000],                   // 3
    [0, 10_000, 100_000],              // 4
    [1_000_000, 1_000_000, 1_000_000], // 5
];

/// Defense bonus indexed `[chain_length][closed_edges]`
pub const DEFENSE: [[i32; 3]; 5] = [
    [0, 0, 0],             // 0
    [0, 10, 5],            // 1
    [0, 120, 60],          // 2
    [0, 2_500, 500],       // 3
    [0, 500_000, 500_000], // 4
];

/// Static evaluation weight indexed `[chain_length - 1][open_edges]`
pub const WEIGHTS: [[i32; 3]; 5] = [
    [0, 0, 0],          // 1x0, 1x1, 1x2
    [1, 2, 3],          // 2x0, 2x1, 2x2
    [5, 10, 15],        // 3x0, 3x1, 3x2
    [20, 50, 100],      // 4x0, 4x1, 4x2
    [5000, 5000, 5000], // 5x0, 5x1, 5x2
];

/// Offense bonus for a `(length, open, closed)` chain, 0 when not listed.
#[inline]
pub fn offense_bonus(length: u8, open_edges: u8, closed_edges: u8) -> i32 {
    if open_edges + closed_edges != 2 {
        return 0;
    }
    OFFENSE
        .get(length as usize)
        .and_then(|row| row.get(open_edges as usize))
        .copied()
        .unwrap_or(0)
}

/// Defense bonus for a `(length, closed)` opponent run, 0 when not listed.
#[inline]
pub fn defense_bonus(length: u8, closed_edges: u8) -> i32 {
    DEFENSE
        .get(length as usize)
        .and_then(|row| row.get(closed_edges as usize))
        .copied()
        .unwrap_or(0)
}

/// Static weight for a chain, `None` outside `1..=5` x `0..=2`.
#[inline]
pub fn weight(length: u8, open_edges: u8) -> Option<i32> {
    let row = (length as usize).checked_sub(1)?;
    WEIGHTS.get(row)?.get(open_edges as usize).copied()
}
