//! The Legality Filter: given a candidate move, evaluate it on a scratch
//! clone of the board and keep it only if the mover's own king comes out of
//! it unattacked. Never mutates the board it is called with.

use crate::board::{BoardView, Hypothetical};
use crate::piece::{self, Color, kind};

use super::types::Candidate;

/// True if `square` is attacked by the side opposite to whoever is to move
/// on `board`. Builds its own scratch snapshot internally — callers never
/// need to clone first.
pub fn is_attacked<B: BoardView + ?Sized>(board: &B, square: u8) -> bool {
    let mover = board.side_to_move();
    let mut scratch = board.to_hypothetical();
    scratch.place(square, piece::make_piece(piece::Piece::Pawn, mover));
    scratch.set_side_to_move(mover.opposite());
    !super::attackers::attackers_of(&scratch, square, kind::ALL, mover.opposite()).is_empty()
}

/// Applies `candidate` (a move to `target`) on a scratch clone of `board`
/// and reports whether the mover's own king is left unattacked afterward.
/// `Hypothetical::place` keeps the king-square cache current, so whether
/// the moved piece was the king itself (including castling) or not, reading
/// it back off the scratch afterward is always correct.
pub fn is_legal<B: BoardView + ?Sized>(board: &B, candidate: &Candidate, target: u8) -> bool {
    let mover = board.side_to_move();
    let mut scratch = board.to_hypothetical();
    apply_candidate(&mut scratch, candidate, target);
    !is_attacked_by_scratch(&scratch, scratch.king_square(mover), mover)
}

/// Mirrors [`is_attacked`] but starts from an already-built hypothetical
/// whose side-to-move is still the mover (hasn't been flipped for a real
/// turn transition), used by the Legality Filter after it has applied a
/// candidate on the scratch board.
fn is_attacked_by_scratch(scratch: &Hypothetical, square: u8, mover: Color) -> bool {
    let mut probe = scratch.clone();
    probe.place(square, piece::make_piece(piece::Piece::Pawn, mover));
    probe.set_side_to_move(mover.opposite());
    !super::attackers::attackers_of(&probe, square, kind::ALL, mover.opposite()).is_empty()
}

/// Applies a candidate's effect to a scratch board: moves the piece, clears
/// an en-passant capture, and (for castling) relocates the rook too. Does
/// not touch castling rights or clocks — those belong to the real executor,
/// not to a throwaway legality check.
pub(super) fn apply_candidate(scratch: &mut Hypothetical, candidate: &Candidate, target: u8) {
    let moving = scratch.piece_at(candidate.from);
    scratch.clear(candidate.from);
    scratch.place(target, moving);

    if let Some(captured_square) = candidate.en_passant_capture {
        scratch.clear(captured_square);
    }

    if let Some(side) = candidate.castle_side {
        let mover = piece::color_of(moving);
        let mover = Color::from_bit(mover);
        let (rook_from, rook_to) = crate::moves::special::castle_rook_squares(mover, side);
        let rook = scratch.piece_at(rook_from);
        scratch.clear(rook_from);
        scratch.place(rook_to, rook);
    }

    scratch.set_en_passant(candidate.en_passant_target);
}
