//! Chess board representation and rules.
//!
//! Positions are immutable snapshots: applying a move produces a new
//! `Position` and never touches the old one. Supports full move legality
//! including castling, en passant, and (queen-only) promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::Position;
//!
//! let position = Position::initial();
//! let moves = position.all_legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod apply;
mod attacks;
mod builder;
mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, SquareError};
pub use state::{Board, Position};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, Square};
