use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required: placement, side to move, castling rights,
    /// en-passant target, halfmove clock, fullmove number. The placement must
    /// describe exactly 8 ranks of exactly 8 files each.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let rank_strs: Vec<&str> = parts[0].split('/').collect();
        if rank_strs.len() != 8 {
            return Err(FenError::WrongRankCount {
                found: rank_strs.len(),
            });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in rank_strs.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += d as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, CastleSide::Kingside),
                'Q' => castling_rights.set(Color::White, CastleSide::Queenside),
                'k' => castling_rights.set(Color::Black, CastleSide::Kingside),
                'q' => castling_rights.set(Color::Black, CastleSide::Queenside),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            match Square::from_str(parts[3]) {
                Ok(sq) => Some(sq),
                Err(_) => {
                    return Err(FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })
                }
            }
        };

        let halfmove_clock: u32 =
            parts[4]
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?;

        let fullmove_number: u32 =
            parts[5]
                .parse()
                .map_err(|_| FenError::InvalidFullmoveNumber {
                    found: parts[5].to_string(),
                })?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            });
        }

        Ok(Position {
            board,
            white_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Convert the position to FEN notation.
    ///
    /// Exact inverse of [`Position::from_fen`] for any position reachable
    /// through normal play. Empty castling rights and an absent en-passant
    /// target are written as `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square(rank, file);
                if let Some((color, piece)) = self.board.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        if self.castling_rights.has(Color::White, CastleSide::Kingside) {
            castling.push('K');
        }
        if self.castling_rights.has(Color::White, CastleSide::Queenside) {
            castling.push('Q');
        }
        if self.castling_rights.has(Color::Black, CastleSide::Kingside) {
            castling.push('k');
        }
        if self.castling_rights.has(Color::Black, CastleSide::Queenside) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
