//! Gomoku minimax engine
//!
//! A Gomoku player for small square boards (9x9 by default):
//! - Exactly five in a row wins; an overline of six or more does not
//! - Candidate moves scored from offense and defense lookup tables
//! - Depth-limited minimax with alpha-beta pruning
//! - Static evaluation weighting the opponent's chains 1.5x
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and a scoped move guard
//! - [`rules`]: Chain walks and the exact-five win rule
//! - [`eval`]: Lookup tables, move scoring and static evaluation
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Match state and turn loop
//! - [`ui`]: Console front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_max_depth(2));
//!
//! board.place(Pos::new(4, 4), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.find_best_move(&mut board, Stone::White, Stone::Black) {
//!     board.place(pos, Stone::White);
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search Priority
//!
//! The AI engine follows this search priority:
//! 1. Centre opening on an empty (or one-stone) board
//! 2. Immediate winning move
//! 3. Block of the opponent's immediate five
//! 4. Alpha-Beta search over pruned candidates

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{find_best_move, AIEngine, MoveResult, SearchType};
pub use error::{GomokuError, Result};
pub use game::{Game, GameMode, GameOutcome, Player, PlayerKind};
