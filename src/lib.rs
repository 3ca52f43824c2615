pub mod board;
pub mod game;

pub use board::{Board, CastleSide, CastlingRights, Color, Move, Piece, Position, Square};
pub use game::{Game, GameError, GameStatus};
