//! The Attacker Generator: for a target square, a piece-kind mask, and a
//! side, enumerate every square that side's pieces of those kinds could
//! move to the target from — ignoring whether the move would expose that
//! side's own king. Self-check pruning is the Legality Filter's job.

use crate::board::{BoardView, CastleSide, king_home_square};
use crate::geometry::{self, BISHOP_DIRECTIONS, KING_DIRECTIONS, KNIGHT_DELTAS, ROOK_DIRECTIONS};
use crate::piece::{self, Color, kind};

use super::types::{Candidate, Candidates};

/// Enumerates candidate sources for `target`, restricted to pieces of
/// `side` whose kind intersects `kind_mask`.
pub fn attackers_of<B: BoardView + ?Sized>(
    board: &B,
    target: u8,
    kind_mask: u8,
    side: Color,
) -> Candidates {
    let mut out = Candidates::new();

    if kind_mask & kind::KNIGHT != 0 {
        knight_candidates(board, target, side, &mut out);
    }
    if kind_mask & kind::ORTHOGONAL_SLIDER != 0 {
        slider_candidates(board, target, side, kind_mask & kind::ORTHOGONAL_SLIDER, &ROOK_DIRECTIONS, &mut out);
    }
    if kind_mask & kind::DIAGONAL_SLIDER != 0 {
        slider_candidates(board, target, side, kind_mask & kind::DIAGONAL_SLIDER, &BISHOP_DIRECTIONS, &mut out);
    }
    if kind_mask & kind::KING != 0 {
        king_candidates(board, target, side, &mut out);
        castle_candidates(board, target, side, &mut out);
    }
    if kind_mask & kind::PAWN != 0 {
        pawn_candidates(board, target, side, &mut out);
    }

    out
}

fn push(out: &mut Candidates, candidate: Candidate) {
    // Silently drop past the bound rather than panic: an overlong candidate
    // list can only arise from a corrupt board, and the generator never
    // returns an error (unreachable squares are just absent from its output).
    let _ = out.try_push(candidate);
}

fn knight_candidates<B: BoardView + ?Sized>(board: &B, target: u8, side: Color, out: &mut Candidates) {
    for &(df, dr) in &KNIGHT_DELTAS {
        if let Some(src) = geometry::offset(target, df, dr) {
            let code = board.piece_at(src);
            if piece::kind_of(code) == kind::KNIGHT && piece::is_color(code, side) {
                push(out, Candidate::simple(src));
            }
        }
    }
}

fn slider_candidates<B: BoardView + ?Sized>(
    board: &B,
    target: u8,
    side: Color,
    kind_mask: u8,
    directions: &[i8],
    out: &mut Candidates,
) {
    for &dir in directions {
        for square in geometry::ray(target, dir) {
            let code = board.piece_at(square);
            if code == piece::EMPTY {
                continue;
            }
            if piece::kind_of(code) & kind_mask != 0 && piece::is_color(code, side) {
                push(out, Candidate::simple(square));
            }
            break;
        }
    }
}

fn king_candidates<B: BoardView + ?Sized>(board: &B, target: u8, side: Color, out: &mut Candidates) {
    for &dir in &KING_DIRECTIONS {
        if let Some(src) = geometry::step(target, dir) {
            let code = board.piece_at(src);
            if piece::kind_of(code) == kind::KING && piece::is_color(code, side) {
                push(out, Candidate::simple(src));
            }
        }
    }
}

fn castle_candidates<B: BoardView + ?Sized>(board: &B, target: u8, side: Color, out: &mut Candidates) {
    let home = king_home_square(side);
    if board.king_square(side) != home {
        return;
    }
    for &castle_side in &[CastleSide::Kingside, CastleSide::Queenside] {
        if target == castle_side.king_destination(side) {
            let mut candidate = Candidate::simple(home);
            candidate.castle_side = Some(castle_side);
            push(out, candidate);
        }
    }
}

fn pawn_candidates<B: BoardView + ?Sized>(board: &B, target: u8, side: Color, out: &mut Candidates) {
    use geometry::{DOWN, DOWNL, DOWNR, UP, UPL, UPR};

    let (reverse, start_rank, double_push_rank, promo_rank, capture_reverse) = match side {
        Color::White => (DOWN, 6, 4, 0, [DOWNL, DOWNR]),
        Color::Black => (UP, 1, 3, 7, [UPL, UPR]),
    };

    // Single advance.
    if let Some(src) = geometry::step(target, reverse) {
        let moving = board.piece_at(src);
        if board.piece_at(target) == piece::EMPTY && piece::kind_of(moving) == kind::PAWN && piece::is_color(moving, side) {
            let mut candidate = Candidate::simple(src);
            candidate.promotes = geometry::rank_of(target) == promo_rank;
            push(out, candidate);
        }
    }

    // Double advance.
    if geometry::rank_of(target) == double_push_rank {
        if let Some(intervening) = geometry::step(target, reverse) {
            if board.piece_at(intervening) == piece::EMPTY && board.piece_at(target) == piece::EMPTY {
                if let Some(src) = geometry::step(intervening, reverse) {
                    let moving = board.piece_at(src);
                    if piece::kind_of(moving) == kind::PAWN
                        && piece::is_color(moving, side)
                        && geometry::rank_of(src) == start_rank
                    {
                        let mut candidate = Candidate::simple(src);
                        candidate.is_double_push = true;
                        candidate.en_passant_target = Some(intervening);
                        push(out, candidate);
                    }
                }
            }
        }
    }

    // Diagonal capture.
    for &dir in &capture_reverse {
        if let Some(src) = geometry::step(target, dir) {
            let moving = board.piece_at(src);
            if piece::kind_of(moving) != kind::PAWN || !piece::is_color(moving, side) {
                continue;
            }
            let occupant = board.piece_at(target);
            if occupant != piece::EMPTY && !piece::is_color(occupant, side) {
                let mut candidate = Candidate::simple(src);
                candidate.promotes = geometry::rank_of(target) == promo_rank;
                push(out, candidate);
            }
        }
    }

    // En passant.
    if board.en_passant() == Some(target) {
        for &dir in &capture_reverse {
            if let Some(src) = geometry::step(target, dir) {
                let moving = board.piece_at(src);
                if piece::kind_of(moving) == kind::PAWN && piece::is_color(moving, side) {
                    if let Some(captured) = geometry::step(target, reverse) {
                        let mut candidate = Candidate::simple(src);
                        candidate.en_passant_capture = Some(captured);
                        push(out, candidate);
                    }
                }
            }
        }
    }
}
