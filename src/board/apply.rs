//! Move application.
//!
//! Applying a move is a pure snapshot transformation: the input position is
//! never mutated and the result shares no board with it. Legality is the
//! caller's business; the applier trusts the move's flags as generated.

use super::{CastleSide, Color, Move, Piece, Position, Square};

fn rook_home(color: Color, side: CastleSide) -> Square {
    Square(color.back_rank(), side.rook_home_file())
}

impl Position {
    /// Apply one move, producing the successor position.
    ///
    /// Updates piece placement, castling rights, en-passant target, move
    /// counters, and the side to move. The move's flags are consumed as-is;
    /// nothing is re-derived from board contents.
    ///
    /// # Panics
    /// Panics if the origin square is empty. That is out of contract, not a
    /// defined error: callers apply generated moves only.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        let (color, piece) = self
            .board
            .piece_at(mv.from)
            .expect("apply: origin square empty");

        if piece == Piece::Pawn || mv.is_capture {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if !self.white_to_move {
            next.fullmove_number += 1;
        }

        next.en_passant_target = if mv.is_double_pawn_push {
            let passed_rank = usize::midpoint(mv.from.rank(), mv.to.rank());
            Some(Square(passed_rank, mv.from.file()))
        } else {
            None
        };

        if mv.is_en_passant {
            // The captured pawn sits beside the origin, on the destination file.
            next.board.remove_piece(Square(mv.from.rank(), mv.to.file()));
        }

        if let Some(side) = mv.castle {
            let back_rank = color.back_rank();
            next.board.remove_piece(Square(back_rank, side.rook_home_file()));
            next.board
                .set_piece(Square(back_rank, side.rook_target_file()), color, Piece::Rook);
        }

        next.board.remove_piece(mv.from);
        next.board.set_piece(mv.to, color, mv.promotion.unwrap_or(piece));

        if piece == Piece::King {
            next.castling_rights.remove_both(color);
        } else if piece == Piece::Rook {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if mv.from == rook_home(color, side) {
                    next.castling_rights.remove(color, side);
                }
            }
        }
        if mv.is_capture {
            // A capture landing on a rook's home square costs that side's
            // right even though the rook wasn't the mover.
            let opponent = color.opponent();
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if mv.to == rook_home(opponent, side) {
                    next.castling_rights.remove(opponent, side);
                }
            }
        }

        next.white_to_move = !self.white_to_move;
        next
    }
}
