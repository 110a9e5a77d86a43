//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, PlacedStone};

/// Default board size (9x9)
pub const BOARD_SIZE: usize = 9;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 81

/// Smallest board that can hold a five
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the 128-bit bitboard can hold (11x11 = 121 cells)
pub const MAX_BOARD_SIZE: usize = 11;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used by the text renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
            Stone::Empty => '_',
        }
    }

    /// Parse a player color from its symbol (case-insensitive)
    pub fn from_symbol(c: char) -> Option<Stone> {
        match c.to_ascii_uppercase() {
            'B' => Some(Stone::Black),
            'W' => Some(Stone::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board, 0-based.
///
/// `x` is the column and `y` the row. Bounds are checked by the [`Board`]
/// since its size is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Convert 1-based column/row numbers typed by a human.
    ///
    /// Returns `None` for zero or values that do not fit a coordinate.
    pub fn from_one_based(column: usize, row: usize) -> Option<Self> {
        let x = u8::try_from(column.checked_sub(1)?).ok()?;
        let y = u8::try_from(row.checked_sub(1)?).ok()?;
        Some(Self { x, y })
    }

    /// 1-based (column, row) pair for display
    #[inline]
    pub fn to_one_based(self) -> (usize, usize) {
        (self.x as usize + 1, self.y as usize + 1)
    }

    /// Cell index on a board of the given size (row-major)
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx % size) as u8,
            y: (idx / size) as u8,
        }
    }

    /// Step by a direction vector, `None` when the result would be negative
    /// or exceed `u8`. Board bounds are checked separately.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = u8::try_from(i32::from(self.x) + dx).ok()?;
        let y = u8::try_from(i32::from(self.y) + dy).ok()?;
        Some(Pos { x, y })
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
