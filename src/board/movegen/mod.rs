//! Move generation.
//!
//! `pseudo_moves` produces shape-legal moves for the piece on a square and
//! deliberately allows moves into check; `legal_moves` filters those out by
//! simulating each candidate on a throwaway copy of the position. Castling
//! attack-safety is the one exception: it is part of the move's shape and is
//! enforced at generation time.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderKind;

use super::{Move, Piece, Position, Square};

impl Position {
    /// Generate pseudo-legal moves for the piece on `from`.
    ///
    /// Empty squares yield an empty list. The piece's own color decides the
    /// move shapes; the side to move is not consulted. Output order is
    /// deterministic for a fixed position.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Move> {
        let Some((color, piece)) = self.board.piece_at(from) else {
            return Vec::new();
        };
        match piece {
            Piece::Pawn => self.pawn_moves(from, color),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.slider_moves(from, color, SliderKind::Bishop),
            Piece::Rook => self.slider_moves(from, color, SliderKind::Rook),
            Piece::Queen => self.slider_moves(from, color, SliderKind::Queen),
            Piece::King => self.king_moves(from, color),
        }
    }

    /// Generate the legal moves for the piece on `from`.
    ///
    /// Empty unless the piece belongs to the side to move. Each pseudo-legal
    /// candidate is applied to a copy and discarded if the mover's king ends
    /// up attacked.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        let Some((color, _)) = self.board.piece_at(from) else {
            return Vec::new();
        };
        if color != self.side_to_move() {
            return Vec::new();
        }
        self.pseudo_moves(from)
            .into_iter()
            .filter(|mv| !self.apply(mv).is_in_check(color))
            .collect()
    }

    /// All legal moves for the side to move, across every square.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                moves.extend(self.legal_moves(Square(rank, file)));
            }
        }
        moves
    }

    /// Whether the side to move has at least one legal move.
    #[must_use]
    pub fn has_any_legal_move(&self) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                if !self.legal_moves(Square(rank, file)).is_empty() {
                    return true;
                }
            }
        }
        false
    }
}
