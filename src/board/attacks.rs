//! Static attack queries.
//!
//! Answers "is this square attacked by that color" against a board snapshot,
//! with no knowledge of turn order or history. Knight and king reaches are
//! precomputed per square; sliding attacks walk rays and stop at the first
//! occupied square.

use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Position, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn leap_table(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let sq = Square(idx / 8, idx % 8);
        deltas
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .collect()
    })
}

static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| leap_table(&KNIGHT_DELTAS));
static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| leap_table(&KING_DELTAS));

pub(crate) fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[sq.rank() * 8 + sq.file()]
}

pub(crate) fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS[sq.rank() * 8 + sq.file()]
}

impl Board {
    /// Whether any piece of `by` could capture on `square` given the current
    /// board.
    ///
    /// Pawn attacks are the forward diagonals only; sliding pieces are
    /// blocked by the first occupied square along each ray.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn attacks `square` from one rank behind it (from the pawn's
        // point of view), so look backwards along the attacker's direction.
        let dir = by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(-dir, df) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for &from in knight_targets(square) {
            if self.piece_at(from) == Some((by, Piece::Knight)) {
                return true;
            }
        }

        for &from in king_targets(square) {
            if self.piece_at(from) == Some((by, Piece::King)) {
                return true;
            }
        }

        for &(dr, df) in &BISHOP_DIRS {
            if let Some((color, piece)) = self.first_piece_along(square, dr, df) {
                if color == by && matches!(piece, Piece::Bishop | Piece::Queen) {
                    return true;
                }
            }
        }

        for &(dr, df) in &ROOK_DIRS {
            if let Some((color, piece)) = self.first_piece_along(square, dr, df) {
                if color == by && matches!(piece, Piece::Rook | Piece::Queen) {
                    return true;
                }
            }
        }

        false
    }

    fn first_piece_along(&self, from: Square, dr: isize, df: isize) -> Option<(Color, Piece)> {
        let mut current = from.offset(dr, df);
        while let Some(sq) = current {
            if let Some(occupant) = self.piece_at(sq) {
                return Some(occupant);
            }
            current = sq.offset(dr, df);
        }
        None
    }
}

impl Position {
    /// Whether `color`'s king is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.find_king(color) {
            Some(king_sq) => self.board.is_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
