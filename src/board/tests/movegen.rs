//! Tests for pseudo-legal generation and the legality filter.

use super::{pos, sq};
use crate::board::{CastleSide, Move, Piece, Position};

#[test]
fn test_starting_position_has_twenty_moves() {
    let start = Position::initial();
    assert_eq!(start.all_legal_moves().len(), 20);
    assert_eq!(start.legal_moves(sq("e2")).len(), 2);
    assert_eq!(start.legal_moves(sq("b1")).len(), 2);
}

#[test]
fn test_empty_square_yields_nothing() {
    let start = Position::initial();
    assert!(start.pseudo_moves(sq("e4")).is_empty());
    assert!(start.legal_moves(sq("e4")).is_empty());
}

#[test]
fn test_pseudo_moves_ignore_turn_but_legal_moves_do_not() {
    let start = Position::initial();
    // Black knight while White is to move
    assert_eq!(start.pseudo_moves(sq("b8")).len(), 2);
    assert!(start.legal_moves(sq("b8")).is_empty());
}

#[test]
fn test_pawn_blocked_push() {
    let position = pos("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
    assert!(position.legal_moves(sq("e3")).is_empty());
}

#[test]
fn test_pawn_double_push_blocked_midway() {
    let position = pos("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    let moves = position.legal_moves(sq("e2"));
    assert!(moves.iter().all(|m| !m.is_double_pawn_push));
}

#[test]
fn test_pawn_double_push_only_from_start_rank() {
    let position = pos("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    let moves = position.legal_moves(sq("e3"));
    assert_eq!(moves.len(), 1);
    assert!(!moves[0].is_double_pawn_push);
}

#[test]
fn test_pawn_captures_are_diagonal_only() {
    let position = pos("4k3/8/8/3r1r2/4P3/8/8/4K3 w - - 0 1");
    let moves = position.legal_moves(sq("e4"));
    let captures: Vec<&Move> = moves.iter().filter(|m| m.is_capture).collect();
    assert_eq!(captures.len(), 2);
    assert!(captures.iter().any(|m| m.to == sq("d5")));
    assert!(captures.iter().any(|m| m.to == sq("f5")));
}

#[test]
fn test_pawn_cannot_capture_own_piece() {
    let position = pos("4k3/8/8/3N4/4P3/8/8/4K3 w - - 0 1");
    let moves = position.legal_moves(sq("e4"));
    assert!(moves.iter().all(|m| m.to != sq("d5")));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let start = Position::initial();
    let moves = start.legal_moves(sq("g1"));
    assert!(moves.iter().any(|m| m.to == sq("f3")));
    assert!(moves.iter().any(|m| m.to == sq("h3")));
}

#[test]
fn test_slider_stops_at_blockers() {
    let position = pos("4k3/8/8/8/8/2p5/8/R3K3 w - - 0 1");
    let moves = position.legal_moves(sq("a1"));
    // Up the a-file and along the rank until the king
    assert!(moves.iter().any(|m| m.to == sq("a8")));
    assert!(moves.iter().any(|m| m.to == sq("d1")));
    assert!(moves.iter().all(|m| m.to != sq("e1")));
}

#[test]
fn test_bishop_rook_queen_direction_sets() {
    let position = pos("4k3/8/8/3Q4/8/8/8/4K3 w - - 0 1");
    let queen_moves = position.legal_moves(sq("d5")).len();
    let bishop = pos("4k3/8/8/3B4/8/8/8/4K3 w - - 0 1");
    let rook = pos("4k3/8/8/3R4/8/8/8/4K3 w - - 0 1");
    let bishop_moves = bishop.legal_moves(sq("d5")).len();
    let rook_moves = rook.legal_moves(sq("d5")).len();
    assert_eq!(queen_moves, bishop_moves + rook_moves);
}

#[test]
fn test_pinned_piece_has_no_legal_moves() {
    // Knight on e2 shields the king from the rook on e8
    let position = pos("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(!position.pseudo_moves(sq("e2")).is_empty());
    assert!(position.legal_moves(sq("e2")).is_empty());
}

#[test]
fn test_pinned_slider_may_move_along_the_pin() {
    let position = pos("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
    let moves = position.legal_moves(sq("e2"));
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.to.file() == 4));
}

#[test]
fn test_king_avoids_attacked_squares() {
    let position = pos("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
    let moves = position.legal_moves(sq("e1"));
    // Rank 2 is swept by the rook
    assert!(moves.iter().all(|m| m.to.rank() != 1));
    assert!(moves.iter().any(|m| m.to == sq("d1")));
}

#[test]
fn test_check_restricts_to_evasions() {
    // Rook gives check along the e-file; knight can block, king can step aside
    let position = pos("4r1k1/8/8/8/8/8/2N5/4K3 w - - 0 1");
    let moves = position.all_legal_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(!position.apply(mv).is_in_check(position.side_to_move()));
    }
    assert!(moves.iter().any(|m| m.from == sq("c2") && m.to == sq("e3")));
}

#[test]
fn test_promotion_always_stamped_queen() {
    let position = pos("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = position.legal_moves(sq("a7"));
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.promotion == Some(Piece::Queen)));
}

#[test]
fn test_en_passant_generated_only_with_target() {
    let with = pos("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    assert!(with
        .legal_moves(sq("e5"))
        .iter()
        .any(|m| m.is_en_passant && m.to == sq("d6")));

    let without = pos("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3");
    assert!(without.legal_moves(sq("e5")).iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_castling_generated_when_path_clear() {
    let position = pos("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.iter().any(|m| m.castle == Some(CastleSide::Kingside)));
    assert!(moves.iter().any(|m| m.castle == Some(CastleSide::Queenside)));
}

#[test]
fn test_castling_blocked_by_piece_between() {
    let position = pos("4k3/8/8/8/8/8/8/R2QK1NR w KQ - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.iter().all(|m| m.castle.is_none()));
}

#[test]
fn test_castling_requires_right() {
    let position = pos("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.iter().all(|m| m.castle != Some(CastleSide::Kingside)));
    assert!(moves.iter().any(|m| m.castle == Some(CastleSide::Queenside)));
}

#[test]
fn test_castling_requires_rook_at_home() {
    // Right still recorded but the rook is gone
    let position = pos("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.iter().any(|m| m.castle == Some(CastleSide::Kingside)));
    assert!(moves.iter().all(|m| m.castle != Some(CastleSide::Queenside)));
}

#[test]
fn test_has_any_legal_move_matches_all_legal_moves() {
    let active = Position::initial();
    assert!(active.has_any_legal_move());
    let stuck = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!stuck.has_any_legal_move());
    assert!(stuck.all_legal_moves().is_empty());
}
