//! Quantified invariants from the design's testable-properties list,
//! checked directly rather than incidentally through scenario play.

use chesscore::board::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use chesscore::moves::legality::is_attacked;
use chesscore::piece::{Color, Piece};
use chesscore::{Board, apply_san};

#[test]
fn exactly_one_king_per_colour_matches_cached_squares() {
    let board = Board::default_board();
    assert!(board.check_king_invariant());
    assert_eq!(board.king_square(Color::White), 60);
    assert_eq!(board.king_square(Color::Black), 4);
}

#[test]
fn movers_king_is_never_left_in_check_after_a_commit() {
    let mut board = Board::default_board();
    for token in ["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"] {
        apply_san(&mut board, token).unwrap();
        let mover_just_moved = board.side_to_move().opposite();
        assert!(!is_attacked(&board, board.king_square(mover_just_moved)));
    }
}

#[test]
fn en_passant_target_is_the_square_the_pawn_passed_over() {
    let mut board = Board::default_board();
    apply_san(&mut board, "e4").unwrap();
    // e4 is a double push from e2; the passed-over square is e3 (44).
    assert_eq!(board.en_passant(), Some(44));
    apply_san(&mut board, "Nc6").unwrap();
    assert_eq!(board.en_passant(), None);
}

#[test]
fn castling_right_implies_king_and_rook_on_home_squares() {
    let board = Board::default_board();
    for (bit, color, rook_home) in [
        (CASTLE_WK, Color::White, 63u8),
        (CASTLE_WQ, Color::White, 56u8),
        (CASTLE_BK, Color::Black, 7u8),
        (CASTLE_BQ, Color::Black, 0u8),
    ] {
        assert_ne!(board.castling() & bit, 0);
        let home = chesscore::board::king_home_square(color);
        assert_eq!(board.king_square(color), home);
        let (p, c) = chesscore::piece::decode(board.piece_at(rook_home));
        assert_eq!(p, Piece::Rook);
        assert_eq!(c, color);
    }
}

#[test]
fn pos_count_resets_to_zero_on_a_pawn_move_or_capture() {
    let mut board = Board::default_board();
    apply_san(&mut board, "Nf3").unwrap();
    apply_san(&mut board, "Nf6").unwrap();
    assert_eq!(board.pos_count(), 2);

    apply_san(&mut board, "e4").unwrap(); // irreversible: pawn move, resets then re-records
    assert_eq!(board.pos_count(), 1);
}
