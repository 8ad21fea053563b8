//! Special-move rules that don't fit the generic "generate, then filter"
//! shape: castling eligibility (rights + empty transit + unattacked path)
//! and the rook/home-square geometry castling depends on.

use crate::board::{BoardView, CastleSide, king_home_square};
use crate::piece::{self, Color, kind};

use super::legality::is_attacked;

/// Rook's home square and the square it lands on for a given castle.
pub fn castle_rook_squares(color: Color, side: CastleSide) -> (u8, u8) {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => (63, 61),  // h1 -> f1
        (Color::White, CastleSide::Queenside) => (56, 59), // a1 -> d1
        (Color::Black, CastleSide::Kingside) => (7, 5),    // h8 -> f8
        (Color::Black, CastleSide::Queenside) => (0, 3),   // a8 -> d8
    }
}

/// Squares that must be empty between the king and rook's home squares.
fn transit_squares(color: Color, side: CastleSide) -> &'static [u8] {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &[61, 62],
        (Color::White, CastleSide::Queenside) => &[57, 58, 59],
        (Color::Black, CastleSide::Kingside) => &[5, 6],
        (Color::Black, CastleSide::Queenside) => &[1, 2, 3],
    }
}

/// Squares the king itself passes through (inclusive of home and
/// destination), each of which must be unattacked.
fn king_path(color: Color, side: CastleSide) -> [u8; 3] {
    let home = king_home_square(color);
    let dest = side.king_destination(color);
    let mid = match side {
        CastleSide::Kingside => home + 1,
        CastleSide::Queenside => home - 1,
    };
    [home, mid, dest]
}

/// Re-verifies full castling eligibility for `color`/`side` against `board`:
/// rights bit set, king and rook still on their home squares, transit
/// squares empty, and no square the king passes through is attacked.
pub fn can_castle<B: BoardView + ?Sized>(board: &B, color: Color, side: CastleSide) -> bool {
    if board.castling() & side.rights_bit(color) == 0 {
        return false;
    }
    if board.king_square(color) != king_home_square(color) {
        return false;
    }
    let (rook_home, _) = castle_rook_squares(color, side);
    let rook = board.piece_at(rook_home);
    if piece::kind_of(rook) != kind::ROOK || !piece::is_color(rook, color) {
        return false;
    }
    if transit_squares(color, side).iter().any(|&sq| board.piece_at(sq) != piece::EMPTY) {
        return false;
    }
    king_path(color, side).iter().all(|&sq| !is_attacked(board, sq))
}

/// Narrower than [`can_castle`]: checks only whether the king and rook
/// still sit on their home squares with the right colour/kind, ignoring
/// transit occupancy and attacked squares. Used by the Move Executor to
/// revoke a castling-rights bit once the king or rook it depends on has
/// moved away or been captured.
pub fn castle_rights_intact<B: BoardView + ?Sized>(board: &B, color: Color, side: CastleSide) -> bool {
    if board.king_square(color) != king_home_square(color) {
        return false;
    }
    let (rook_home, _) = castle_rook_squares(color, side);
    let rook = board.piece_at(rook_home);
    piece::kind_of(rook) == kind::ROOK && piece::is_color(rook, color)
}

/// Default promotion piece when SAN carries no `=X` suffix.
pub const DEFAULT_PROMOTION: piece::Piece = piece::Piece::Queen;
