//! Board structure with empty-cell bookkeeping

use std::ops::{Deref, DerefMut};

use super::bitboard::{Bitboard, BITBOARD_CELLS};
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GomokuError, Result};

/// Game board.
///
/// Invariant: `moves_left` always equals the number of empty cells. A cell
/// only ever goes Empty -> stone -> Empty, never directly Black <-> White.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    size: u8,
    moves_left: u16,
}

impl Board {
    /// Create an empty 9x9 board
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE as u8)
    }

    /// Create an empty board of the given size.
    ///
    /// Sizes outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` are rejected.
    pub fn with_size(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GomokuError::UnsupportedBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        debug_assert!(size * size <= BITBOARD_CELLS);
        Ok(Self::empty(size as u8))
    }

    fn empty(size: u8) -> Self {
        let cells = u16::from(size) * u16::from(size);
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            size,
            moves_left: cells,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.size() * self.size()
    }

    /// Number of empty cells left
    #[inline]
    pub fn moves_left(&self) -> usize {
        self.moves_left as usize
    }

    /// True once every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves_left == 0
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Centre cell (`size / 2` on both axes)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Get stone at position. Off-board positions read as Empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !self.in_bounds(pos) {
            return Stone::Empty;
        }
        let idx = pos.to_index(self.size());
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board.
    ///
    /// Chain walks step with signed deltas and use this to detect the edge.
    #[inline]
    pub fn stone_at(&self, x: i32, y: i32) -> Option<Stone> {
        let size = i32::from(self.size);
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(self.get(Pos::new(x as u8, y as u8)))
    }

    /// Check if position is an empty on-board cell
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone.
    ///
    /// Succeeds iff `pos` is on the board, the cell is empty and `stone` is a
    /// real color. Returns false without touching the board otherwise.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        let idx = pos.to_index(self.size());
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => return false,
        }
        self.moves_left -= 1;
        true
    }

    /// Remove a stone placed by `place`.
    ///
    /// Succeeds iff `pos` is on the board and holds exactly `stone`.
    pub fn remove(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty || !self.in_bounds(pos) || self.get(pos) != stone {
            return false;
        }
        let idx = pos.to_index(self.size());
        match stone {
            Stone::Black => self.black.clear(idx),
            Stone::White => self.white.clear(idx),
            Stone::Empty => unreachable!(),
        }
        self.moves_left += 1;
        true
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The stone is removed again when the guard drops, on every exit path.
    /// Returns `None` when `place` would fail.
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> Option<PlacedStone<'_>> {
        if self.place(pos, stone) {
            Some(PlacedStone {
                board: self,
                pos,
                stone,
            })
        } else {
            None
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        let count = self.total_cells() - self.moves_left();
        debug_assert_eq!(count, (self.black.count() + self.white.count()) as usize);
        count
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Positions holding `stone` in row-major order
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bits = match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => Bitboard::new(),
        };
        let size = self.size();
        bits.iter_ones().map(move |idx| Pos::from_index(idx, size))
    }

    /// Every occupied cell with its stone
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.stones(Stone::Black)
            .map(|p| (p, Stone::Black))
            .chain(self.stones(Stone::White).map(|p| (p, Stone::White)))
    }

    /// Empty cells in column-major order (x outer, y inner)
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |x| (0..size).map(move |y| Pos::new(x, y)))
            .filter(move |&p| self.get(p) == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A speculative stone that is taken back when dropped.
///
/// Dereferences to the board so the search can keep recursing through it.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
    stone: Stone,
}

impl PlacedStone<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        let removed = self.board.remove(self.pos, self.stone);
        debug_assert!(removed, "scoped stone at {} was disturbed", self.pos);
    }
}
