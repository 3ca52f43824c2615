use crate::board::attacks::{BISHOP_DIRS, ROOK_DIRS};
use crate::board::{Color, Move, Position, Square};

const QUEEN_DIRS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Kind of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderKind {
    Bishop,
    Rook,
    Queen,
}

impl SliderKind {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderKind::Bishop => &BISHOP_DIRS,
            SliderKind::Rook => &ROOK_DIRS,
            SliderKind::Queen => &QUEEN_DIRS,
        }
    }
}

impl Position {
    pub(crate) fn slider_moves(&self, from: Square, color: Color, kind: SliderKind) -> Vec<Move> {
        let mut moves = Vec::new();
        for &(dr, df) in kind.directions() {
            let mut current = from.offset(dr, df);
            while let Some(to) = current {
                match self.board.piece_at(to) {
                    None => {
                        moves.push(Move::quiet(from, to));
                        current = to.offset(dr, df);
                    }
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
