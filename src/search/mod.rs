//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation with offense/defense ordering and pruning
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::{generate_candidates, Candidate};
