use crate::board::attacks::king_targets;
use crate::board::{CastleSide, Color, Move, Piece, Position, Square};

impl Position {
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for &to in king_targets(from) {
            match self.board.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((occupant, _)) if occupant != color => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }

        let back_rank = color.back_rank();
        if from == Square(back_rank, 4) {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if self.castle_allowed(color, side) {
                    let to = Square(back_rank, side.king_target_file());
                    moves.push(Move::castle(from, to, side));
                }
            }
        }

        moves
    }

    /// Castling preconditions: right still held, rook on its home square,
    /// the squares between king and rook empty, and the king's start,
    /// transit, and destination squares all unattacked. The rook's own
    /// square may be attacked.
    fn castle_allowed(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let back_rank = color.back_rank();
        let rook_home = Square(back_rank, side.rook_home_file());
        if self.board.piece_at(rook_home) != Some((color, Piece::Rook)) {
            return false;
        }

        let between: &[usize] = match side {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        };
        if between
            .iter()
            .any(|&file| !self.board.is_empty(Square(back_rank, file)))
        {
            return false;
        }

        let opponent = color.opponent();
        let king_path = [4, side.rook_target_file(), side.king_target_file()];
        !king_path
            .iter()
            .any(|&file| self.board.is_attacked(Square(back_rank, file), opponent))
    }
}
