//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::Piece;
use super::square::Square;

/// A move descriptor: origin, destination, and the flags the generator
/// decided on.
///
/// Flags are fixed at generation time and consumed unchanged by the applier;
/// nothing re-derives them from board contents later.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    pub is_double_pawn_push: bool,
    pub is_en_passant: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<Piece>,
}

impl Move {
    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_capture: false,
            is_double_pawn_push: false,
            is_en_passant: false,
            castle: None,
            promotion: None,
        }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            is_capture: true,
            ..Move::quiet(from, to)
        }
    }

    /// Create a double pawn push
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move {
            is_double_pawn_push: true,
            ..Move::quiet(from, to)
        }
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            is_capture: true,
            is_en_passant: true,
            ..Move::quiet(from, to)
        }
    }

    /// Create a castling move
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            castle: Some(side),
            ..Move::quiet(from, to)
        }
    }

    /// Attach a promotion piece to this move
    #[inline]
    #[must_use]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        Move {
            promotion: Some(piece),
            ..self
        }
    }

    /// Returns true if this move is castling (either wing)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castle.is_some()
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        if self.is_double_pawn_push {
            write!(f, " dbl")?;
        }
        write!(f, ")")
    }
}
