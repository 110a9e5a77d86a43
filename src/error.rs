//! Error types for the Gomoku game
//!
//! The search core reports domain outcomes as plain values (`bool`,
//! `Option`). These errors cover board construction, the turn loop and the
//! console front end.

use thiserror::Error;

use crate::board::Stone;

/// Errors that can occur outside the search core
#[derive(Error, Debug)]
pub enum GomokuError {
    /// Board size the bitboard representation cannot hold
    #[error("Unsupported board size {size} (must be {min}-{max})")]
    UnsupportedBoardSize { size: usize, min: usize, max: usize },

    /// Coordinates outside the board
    #[error("Position ({x}, {y}) is outside the board")]
    OutOfBounds { x: u8, y: u8 },

    /// Target cell already holds a stone
    #[error("The cell at ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    /// A match needs one Black and one White player
    #[error("Players must hold one Black and one White stone, got {first} and {second}")]
    InvalidPlayers { first: Stone, second: Stone },

    /// Move attempted after the match ended
    #[error("Game is over")]
    GameOver,

    /// AI asked to move on a human's turn
    #[error("It is not an AI player's turn")]
    NotAiTurn,

    /// Search found no legal cell
    #[error("No legal move left on the board")]
    NoLegalMove,

    /// Input stream ended while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    /// Console I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Gomoku operations
pub type Result<T> = std::result::Result<T, GomokuError>;
