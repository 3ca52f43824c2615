//! Game state machine.
//!
//! Orchestrates turns over a history of position snapshots: one entry per
//! half-move played, truncated on undo, never shrinking below the starting
//! entry. All chess knowledge lives in the board module; this layer only
//! sequences it and refuses moves once the game has ended.

use std::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, Position, Square};

/// Outcome state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has at least one legal move
    Active,
    /// The side to move has no legal move and is in check; the payload is
    /// the winner
    Checkmate(Color),
    /// The side to move has no legal move and is not in check
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate; no further moves are accepted.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not in the current legal-move set for the side to move
    /// (or the game has already ended)
    IllegalMove { mv: Move },
    /// Undo requested with only the initial position in the history
    NoHistory,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
            GameError::NoHistory => write!(f, "No earlier position to undo to"),
        }
    }
}

impl std::error::Error for GameError {}

fn status_of(position: &Position) -> GameStatus {
    if position.has_any_legal_move() {
        GameStatus::Active
    } else if position.is_in_check(position.side_to_move()) {
        GameStatus::Checkmate(position.side_to_move().opponent())
    } else {
        GameStatus::Stalemate
    }
}

/// An interactive game: a position history plus the derived outcome state.
///
/// The history is the only mutable state in the crate and is touched solely
/// by [`Game::play`], [`Game::undo`], and [`Game::reset`], each completing in
/// a single step. A concurrent host should serialize those behind its own
/// single-writer lock; positions handed out are snapshots and safe to share.
#[derive(Clone, Debug)]
pub struct Game {
    history: Vec<Position>,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::initial())
    }

    /// Start a game from an arbitrary position snapshot.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let status = status_of(&position);
        Game {
            history: vec![position],
            status,
        }
    }

    /// The current position.
    #[must_use]
    pub fn current_position(&self) -> &Position {
        self.history.last().expect("history never empty")
    }

    /// The current outcome state.
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of positions recorded, including the starting one.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Legal moves for the piece on `square`, or nothing once the game has
    /// ended.
    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.current_position().legal_moves(square)
    }

    /// Play a move.
    ///
    /// The move must be in the current legal-move set for the side to move;
    /// anything else (including any move after checkmate or stalemate) is
    /// rejected with [`GameError::IllegalMove`] and leaves the game
    /// untouched.
    pub fn play(&mut self, mv: Move) -> Result<(Position, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::IllegalMove { mv });
        }
        if !self.current_position().legal_moves(mv.from).contains(&mv) {
            return Err(GameError::IllegalMove { mv });
        }

        let next = self.current_position().apply(&mv);
        self.status = status_of(&next);
        self.history.push(next.clone());
        debug!("played {mv}; status {}", self.status);
        Ok((next, self.status))
    }

    /// Undo the last played move, restoring the previous position.
    ///
    /// Fails with [`GameError::NoHistory`] when only the starting position
    /// remains.
    pub fn undo(&mut self) -> Result<Position, GameError> {
        if self.history.len() <= 1 {
            return Err(GameError::NoHistory);
        }
        self.history.pop();
        let restored = self.current_position().clone();
        self.status = status_of(&restored);
        debug!("undid last move; {} to move", restored.side_to_move());
        Ok(restored)
    }

    /// Forget all played moves, returning to this game's starting position.
    pub fn reset(&mut self) -> Position {
        self.history.truncate(1);
        let position = self.current_position().clone();
        self.status = status_of(&position);
        debug!("game reset");
        position
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
