//! Main AI Engine integrating all search components
//!
//! The engine picks one move per AI turn with a priority system:
//!
//! 1. **Opening**: on an empty board, or a board with a single stone that
//!    leaves the centre free, play the centre
//! 2. **Immediate win**: complete an exact five if possible
//! 3. **Defense**: block a cell where the opponent would complete a five
//! 4. **Alpha-Beta**: depth-limited minimax over the pruned candidates
//!
//! Steps 2 and 3 can be switched off with
//! [`EngineConfig::tactical_checks`](crate::EngineConfig).
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_max_depth(2));
//! let mut board = Board::new();
//! board.place(Pos::new(4, 4), Stone::Black);
//! board.place(Pos::new(5, 5), Stone::White);
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::Black, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::rules::has_five_at;
use crate::search::{SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Forced centre move
    Opening,
    /// Move completing an exact five
    ImmediateWin,
    /// Move blocking the opponent's five
    Defense,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when there is no legal move
    pub best_move: Option<Pos>,
    /// Search value of the move (0 for shortcuts)
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Effective search depth (0 for shortcuts)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(pos: Pos, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            depth: 0,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// The engine owns no board. Each call borrows the caller's board, searches
/// it in place and leaves it exactly as it was; the caller commits the
/// returned move.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration (depth 6).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick the mover's next move.
    ///
    /// Returns `None` when the board has no empty cell or the stones are not
    /// two distinct colors. Callers should check `Board::is_full` first.
    pub fn find_best_move(&mut self, board: &mut Board, mover: Stone, opponent: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, mover, opponent).best_move
    }

    /// Pick the mover's next move and report how it was found.
    pub fn get_move_with_stats(&mut self, board: &mut Board, mover: Stone, opponent: Stone) -> MoveResult {
        let start = Instant::now();
        let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

        if mover == Stone::Empty || opponent != mover.opponent() {
            warn!("refusing to search for mover {:?} against {:?}", mover, opponent);
            return MoveResult::no_move(elapsed(start));
        }

        // 0. Forced centre opening
        if let Some(center) = Self::opening_move(board, mover) {
            debug!("{:?} opens at the centre {}", mover, center);
            return MoveResult::shortcut(center, SearchType::Opening, elapsed(start));
        }

        if self.config.tactical_checks {
            // 1. Complete our own five
            if let Some(win) = Self::find_immediate_win(board, mover) {
                debug!("{:?} completes five at {}", mover, win);
                return MoveResult::shortcut(win, SearchType::ImmediateWin, elapsed(start));
            }

            // 2. Block the opponent's five
            if let Some(block) = Self::find_immediate_win(board, opponent) {
                debug!("{:?} blocks {:?} five at {}", mover, opponent, block);
                return MoveResult::shortcut(block, SearchType::Defense, elapsed(start));
            }
        }

        // 3. Alpha-beta search
        let result = self.searcher.search(board, mover, opponent, self.config.max_depth);
        let result = MoveResult::from_alphabeta(result, elapsed(start));
        match result.best_move {
            Some(pos) => debug!(
                "{:?} plays {} (score {}, depth {}, {} nodes, {}ms)",
                mover, pos, result.score, result.depth, result.nodes, result.time_ms
            ),
            None => debug!("{:?} has no legal move", mover),
        }
        result
    }

    /// Centre move for the first or second stone of the game.
    ///
    /// With one stone down, the centre is used only if it can take the
    /// mover's stone; the trial placement is taken back immediately.
    fn opening_move(board: &mut Board, mover: Stone) -> Option<Pos> {
        let total = board.total_cells();
        let center = board.center();

        if board.moves_left() == total {
            return Some(center);
        }
        if board.moves_left() + 1 == total && board.place_scoped(center, mover).is_some() {
            return Some(center);
        }
        None
    }

    /// First empty cell (column-major) where `stone` would make an exact five.
    fn find_immediate_win(board: &Board, stone: Stone) -> Option<Pos> {
        board.empty_cells().find(|&pos| has_five_at(board, pos, stone))
    }
}

/// Pick a move with a default engine.
///
/// Convenience wrapper for one-off calls; keep an [`AIEngine`] around to
/// reuse its configuration across turns.
pub fn find_best_move(board: &mut Board, mover: Stone, opponent: Stone) -> Option<Pos> {
    AIEngine::new().find_best_move(board, mover, opponent)
}
