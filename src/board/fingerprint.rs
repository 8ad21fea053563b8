//! Canonical position fingerprint: a string that captures everything
//! relevant to threefold repetition and nothing else. Two positions that
//! would be reached by transposing the same set of reversible choices
//! produce identical fingerprints; the halfmove/fullmove clocks never
//! enter the string, since they advance regardless of transposition.

use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::piece::{self, Color, decode};

/// Builds the `<placement> <stm> <castle> <ep>` fingerprint. `placement`
/// packs each rank as a FEN-style run (a piece letter
/// per occupied square, consecutive empty squares collapsed into a single
/// digit) separated by `/`, ranks ordered 8 down to 1 to match the
/// mailbox's top-to-bottom layout.
pub fn fingerprint(board: &Board) -> String {
    let mut placement = String::with_capacity(64 + 8);
    for rank in 0..8u8 {
        if rank > 0 {
            placement.push('/');
        }
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            let square = rank * 8 + file;
            let code = board.piece_at(square);
            if code == piece::EMPTY {
                empty_run += 1;
                continue;
            }
            if empty_run > 0 {
                placement.push((b'0' + empty_run) as char);
                empty_run = 0;
            }
            let (p, c) = decode(code);
            placement.push(p.fingerprint_letter(c));
        }
        if empty_run > 0 {
            placement.push((b'0' + empty_run) as char);
        }
    }

    let stm = match board.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    };

    let mut castle = String::with_capacity(4);
    if board.has_castling_right(CASTLE_WK) {
        castle.push('K');
    }
    if board.has_castling_right(CASTLE_WQ) {
        castle.push('Q');
    }
    if board.has_castling_right(CASTLE_BK) {
        castle.push('k');
    }
    if board.has_castling_right(CASTLE_BQ) {
        castle.push('q');
    }
    if castle.is_empty() {
        castle.push('-');
    }

    let ep = match board.en_passant() {
        Some(square) => crate::geometry::algebraic(square),
        None => "-".to_string(),
    };

    format!("{placement} {stm} {castle} {ep}")
}
