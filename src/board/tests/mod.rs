//! Cross-module tests for the board layer. Unit tests for individual types
//! live next to their definitions; these exercise generation, legality
//! filtering, and application together on whole positions.

mod movegen;

use crate::board::{Move, Position, Square};

/// Parse a FEN that the test author wrote by hand.
pub(crate) fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN '{fen}': {e}"))
}

pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

/// Find the legal move between two squares, panicking if there is none.
pub(crate) fn legal(position: &Position, from: &str, to: &str) -> Move {
    let (from, to) = (sq(from), sq(to));
    position
        .legal_moves(from)
        .into_iter()
        .find(|m| m.to == to)
        .unwrap_or_else(|| panic!("no legal move {from}{to} in {}", position.to_fen()))
}
