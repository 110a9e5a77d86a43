//! Game rules for exact-five Gomoku
//!
//! This module implements:
//! - Chain walks with open/closed edge classification
//! - Win conditions (exactly five in a row)

pub mod chain;
pub mod win;

// Re-exports for convenient access
pub use chain::{axis_chain, chain_run, win_run, AxisChain, ChainRun, AXES, DIRECTIONS};
pub use win::{has_any_five, has_five_at, winner, winning_line, WIN_LENGTH};
