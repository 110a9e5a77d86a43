//! Match state and turn loop
//!
//! A [`Game`] owns the board for one match, the two players and the move
//! history. Black always moves first; turns alternate after every accepted
//! move until someone completes an exact five or the board fills up.

use log::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::engine::AIEngine;
use crate::error::{GomokuError, Result};
use crate::rules::{has_five_at, winning_line};

/// Who picks a player's moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// A named participant holding one stone color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub stone: Stone,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>, stone: Stone) -> Self {
        Self {
            name: name.into(),
            stone,
            kind: PlayerKind::Human,
        }
    }

    pub fn ai(name: impl Into<String>, stone: Stone) -> Self {
        Self {
            name: name.into(),
            stone,
            kind: PlayerKind::Ai,
        }
    }

    #[inline]
    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PvP,
    /// Player vs AI
    PvE { human_color: Stone },
    /// AI vs AI
    EvE,
}

impl GameMode {
    pub fn title(self) -> &'static str {
        match self {
            GameMode::PvP => "Human vs Human",
            GameMode::PvE { .. } => "Human vs AI",
            GameMode::EvE => "AI vs AI",
        }
    }
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Stone, line: Option<[Pos; 5]> },
    Tie,
}

/// One match in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Black player first
    players: [Player; 2],
    current: usize,
    outcome: Option<GameOutcome>,
    history: Vec<(Pos, Stone)>,
}

impl Game {
    /// Start a match on `board` between two players of opposite colors.
    ///
    /// The players may be given in either order; the Black player moves
    /// first.
    pub fn new(board: Board, first: Player, second: Player) -> Result<Self> {
        let players = match (first.stone, second.stone) {
            (Stone::Black, Stone::White) => [first, second],
            (Stone::White, Stone::Black) => [second, first],
            (a, b) => {
                return Err(GomokuError::InvalidPlayers {
                    first: a,
                    second: b,
                })
            }
        };

        let mut game = Self {
            board,
            players,
            current: 0,
            outcome: None,
            history: Vec::new(),
        };
        // A board handed over already full is a tie before the first move
        if game.board.is_full() {
            game.outcome = Some(GameOutcome::Tie);
        }
        Ok(game)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player whose turn it is (the winner once the match is won)
    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Mode implied by the two players' kinds
    pub fn mode(&self) -> GameMode {
        match (self.players[0].is_ai(), self.players[1].is_ai()) {
            (false, false) => GameMode::PvP,
            (true, true) => GameMode::EvE,
            (false, true) => GameMode::PvE {
                human_color: self.players[0].stone,
            },
            (true, false) => GameMode::PvE {
                human_color: self.players[1].stone,
            },
        }
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winning player, if the match ended with a five
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome? {
            GameOutcome::Win { winner, .. } => self.players.iter().find(|p| p.stone == winner),
            GameOutcome::Tie => None,
        }
    }

    /// Moves played so far, oldest first
    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Place the current player's stone at `pos`.
    ///
    /// On success the turn passes to the other player unless the move ended
    /// the match. A rejected move leaves the turn unchanged.
    pub fn play(&mut self, pos: Pos) -> Result<Option<GameOutcome>> {
        if self.is_over() {
            return Err(GomokuError::GameOver);
        }
        if !self.board.in_bounds(pos) {
            return Err(GomokuError::OutOfBounds { x: pos.x, y: pos.y });
        }

        let stone = self.players[self.current].stone;
        if !self.board.place(pos, stone) {
            return Err(GomokuError::Occupied { x: pos.x, y: pos.y });
        }
        self.history.push((pos, stone));
        debug!(
            "{} ({}) plays {} [{} moves left]",
            self.players[self.current].name,
            stone,
            pos,
            self.board.moves_left()
        );

        if has_five_at(&self.board, pos, stone) {
            let line = winning_line(&self.board, pos, stone);
            info!(
                "{} ({}) wins after {} moves",
                self.players[self.current].name,
                stone,
                self.history.len()
            );
            self.outcome = Some(GameOutcome::Win { winner: stone, line });
        } else if self.board.is_full() {
            info!("Game tied after {} moves", self.history.len());
            self.outcome = Some(GameOutcome::Tie);
        } else {
            self.current = 1 - self.current;
        }

        Ok(self.outcome)
    }

    /// Let `engine` choose and play the current AI player's move.
    ///
    /// Returns the cell that was played.
    pub fn play_ai(&mut self, engine: &mut AIEngine) -> Result<Pos> {
        if self.is_over() {
            return Err(GomokuError::GameOver);
        }
        let player = &self.players[self.current];
        if !player.is_ai() {
            return Err(GomokuError::NotAiTurn);
        }

        let stone = player.stone;
        let pos = engine
            .find_best_move(&mut self.board, stone, stone.opponent())
            .ok_or(GomokuError::NoLegalMove)?;
        self.play(pos)?;
        Ok(pos)
    }
}
