use crate::board::attacks::knight_targets;
use crate::board::{Color, Move, Position, Square};

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for &to in knight_targets(from) {
            match self.board.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some((occupant, _)) if occupant != color => moves.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
        moves
    }
}
