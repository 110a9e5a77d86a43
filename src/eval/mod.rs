//! Evaluation module for Gomoku positions
//!
//! This module provides the scoring used by the search:
//! - Lookup tables for offense, defense and chain weights
//! - Candidate cell scoring (offense + defense) for move ordering
//! - Static board evaluation at search leaves

pub mod heuristic;
pub mod move_value;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_side};
pub use move_value::{defense_score, offense_score, score_move};
pub use patterns::{defense_bonus, offense_bonus, weight};
