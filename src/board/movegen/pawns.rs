use crate::board::{Color, Move, Piece, Position, Square};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        // Fixed policy: a pawn reaching the farthest rank becomes a queen,
        // decided here so the applier never re-derives it.
        let push = |moves: &mut Vec<Move>, mv: Move| {
            if mv.to.rank() == promotion_rank {
                moves.push(mv.with_promotion(Piece::Queen));
            } else {
                moves.push(mv);
            }
        };

        if let Some(forward) = from.offset(dir, 0) {
            if self.board.is_empty(forward) {
                push(&mut moves, Move::quiet(from, forward));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.board.is_empty(double) {
                            moves.push(Move::double_pawn_push(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                match self.board.piece_at(target) {
                    Some((occupant, _)) if occupant != color => {
                        push(&mut moves, Move::capture(from, target));
                    }
                    None if Some(target) == self.en_passant_target => {
                        moves.push(Move::en_passant(from, target));
                    }
                    _ => {}
                }
            }
        }

        moves
    }
}
