//! The Move Executor: resolves a [`MoveIntent`] against the board's legal
//! candidates, commits the winning one, and updates every piece of derived
//! state a commit touches (clocks, rights, en-passant, history, the
//! repetition log).

use crate::board::{Board, CastleSide, HistoryEntry};
use crate::error::MoveError;
use crate::piece::{self, Color, Piece, decode, make_piece};
use tracing::{debug, instrument};

use super::attackers::attackers_of;
use super::legality::is_attacked;
use super::legality::is_legal;
use super::special::{can_castle, castle_rights_intact, castle_rook_squares};
use super::types::{Candidate, MoveIntent, MoveRecord};

/// Executes a structured move intent against `board`. On success, `board`
/// reflects the committed move and the returned record mirrors the
/// `history[]` entry that was appended. On failure, `board` is unchanged.
#[instrument(level = "debug", skip(board), fields(mover = ?board.side_to_move()))]
pub fn apply_move(board: &mut Board, intent: MoveIntent) -> Result<MoveRecord, MoveError> {
    let mover = board.side_to_move();
    let result = match intent {
        MoveIntent::Castle(side) => apply_castle(board, mover, side),
        MoveIntent::Normal { piece, src_file, src_rank, dest, promotion } => {
            apply_normal(board, mover, piece, src_file, src_rank, dest, promotion)
        }
    };
    match &result {
        Ok(entry) => debug!(dest = entry.dest, gave_check = entry.gave_check, "move committed"),
        Err(err) => debug!(%err, "move rejected"),
    }
    result
}

fn apply_castle(board: &mut Board, mover: Color, side: CastleSide) -> Result<MoveRecord, MoveError> {
    if !can_castle(board, mover, side) {
        return Err(MoveError::InvalidMove);
    }

    let home = crate::board::king_home_square(mover);
    let dest = side.king_destination(mover);
    let (rook_from, rook_to) = castle_rook_squares(mover, side);

    board.raw_move(home, dest);
    board.raw_move(rook_from, rook_to);
    board.clear_castling_bits(side.rights_bit(mover) | opposite_side(side).rights_bit(mover));

    let entry = HistoryEntry {
        piece: Piece::King,
        color: mover,
        src_file: None,
        src_rank: None,
        dest,
        captured: None,
        gave_check: false,
        castle_side: Some(side),
        promotion: None,
        terminal: false,
    };

    finish_commit(board, mover, entry, false)
}

fn opposite_side(side: CastleSide) -> CastleSide {
    match side {
        CastleSide::Kingside => CastleSide::Queenside,
        CastleSide::Queenside => CastleSide::Kingside,
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_normal(
    board: &mut Board,
    mover: Color,
    piece: Piece,
    src_file: Option<u8>,
    src_rank: Option<u8>,
    dest: u8,
    promotion: Piece,
) -> Result<MoveRecord, MoveError> {
    let kind_mask = piece.bit();
    let candidates = attackers_of(board, dest, kind_mask, mover);

    let legal: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| is_legal(board, c, dest))
        .collect();

    let disambiguated: Vec<&Candidate> = legal
        .iter()
        .filter(|c| match src_file {
            Some(f) => crate::geometry::file_of(c.from) as u8 == f,
            None => true,
        })
        .filter(|c| match src_rank {
            Some(r) => crate::geometry::rank_of(c.from) as u8 == r,
            None => true,
        })
        .collect();

    let chosen = match disambiguated.as_slice() {
        [] => return Err(MoveError::InvalidMove),
        [only] => **only,
        _ => return Err(MoveError::AmbiguousMove),
    };

    // A king reaching a castle destination square resolves to the same
    // candidate the dedicated castle intent would; hand it to `apply_castle`
    // so rights, transit occupancy, and the rook's move are all re-verified
    // instead of moving the king two squares and leaving the rook behind.
    if let Some(side) = chosen.castle_side {
        return apply_castle(board, mover, side);
    }

    let captured = capture_before_move(board, &chosen, dest);
    let is_capture = captured.is_some();
    let is_pawn_move = piece == Piece::Pawn;

    if chosen.promotes && !matches!(promotion, Piece::Bishop | Piece::Knight | Piece::Rook | Piece::Queen) {
        return Err(MoveError::InvalidMove);
    }

    // A pawn capture's source file is always recorded, diagonal or en
    // passant, even when only one pawn could have made the capture — there's
    // no second candidate to disambiguate against, but the file is still
    // part of the move's notation ("exd5").
    let (needed_file, needed_rank) = if is_pawn_move && is_capture {
        (Some(crate::geometry::file_of(chosen.from) as u8), None)
    } else {
        minimal_disambiguator(&chosen, &legal)
    };

    if let Some(ep_capture_square) = chosen.en_passant_capture {
        board.raw_clear(ep_capture_square);
    }
    board.raw_move(chosen.from, dest);

    let promotion_applied = if chosen.promotes {
        board.set_piece(dest, make_piece(promotion, mover));
        Some(promotion)
    } else {
        None
    };

    let entry = HistoryEntry {
        piece,
        color: mover,
        src_file: needed_file,
        src_rank: needed_rank,
        dest,
        captured,
        gave_check: false,
        castle_side: None,
        promotion: promotion_applied,
        terminal: false,
    };

    board.set_en_passant(chosen.en_passant_target);
    if is_pawn_move || is_capture {
        board.set_halfmove_clock(0);
    } else {
        board.set_halfmove_clock(board.halfmoves() + 1);
    }

    finish_commit(board, mover, entry, is_pawn_move || is_capture)
}

/// Reads whatever the move captures before the move clears the board at
/// that square — a normal capture sits at `dest`, an en-passant capture
/// sits on the annotated square instead.
fn capture_before_move(board: &Board, candidate: &Candidate, dest: u8) -> Option<Piece> {
    if let Some(ep_square) = candidate.en_passant_capture {
        let code = board.piece_at(ep_square);
        return (code != piece::EMPTY).then(|| decode(code).0);
    }
    let code = board.piece_at(dest);
    (code != piece::EMPTY).then(|| decode(code).0)
}

/// Picks the smallest disambiguator among `legal` candidates that still
/// singles `chosen` out: none, file only, rank only, or both. Mirrors how a
/// SAN-producing collaborator would have had to write this move.
fn minimal_disambiguator(chosen: &Candidate, legal: &[Candidate]) -> (Option<u8>, Option<u8>) {
    if legal.len() <= 1 {
        return (None, None);
    }
    let chosen_file = crate::geometry::file_of(chosen.from) as u8;
    let chosen_rank = crate::geometry::rank_of(chosen.from) as u8;

    let file_unique = legal
        .iter()
        .filter(|c| crate::geometry::file_of(c.from) as u8 == chosen_file)
        .count()
        == 1;
    if file_unique {
        return (Some(chosen_file), None);
    }

    let rank_unique = legal
        .iter()
        .filter(|c| crate::geometry::rank_of(c.from) as u8 == chosen_rank)
        .count()
        == 1;
    if rank_unique {
        return (None, Some(chosen_rank));
    }

    (Some(chosen_file), Some(chosen_rank))
}

/// Shared tail of both move kinds: revoke stale castling rights, push
/// history and the repetition fingerprint, flip the side to move, and
/// compute whether the move gave check.
fn finish_commit(
    board: &mut Board,
    mover: Color,
    mut entry: HistoryEntry,
    irreversible: bool,
) -> Result<MoveRecord, MoveError> {
    revoke_stale_castling_rights(board);

    board.push_history(entry.clone());
    if irreversible {
        board.reset_repetition_log();
    }
    board.push_fingerprint(crate::board::fingerprint::fingerprint(board));

    board.flip_side_to_move();
    board.increment_fullmoves_if_black_just_moved(mover);

    let opponent_king = board.king_square(board.side_to_move());
    let gave_check = is_attacked(board, opponent_king);
    board.mark_last_move_check(gave_check);
    entry.gave_check = gave_check;

    Ok(entry)
}

fn revoke_stale_castling_rights(board: &mut Board) {
    for &(color, side) in &[
        (Color::White, CastleSide::Kingside),
        (Color::White, CastleSide::Queenside),
        (Color::Black, CastleSide::Kingside),
        (Color::Black, CastleSide::Queenside),
    ] {
        let bit = side.rights_bit(color);
        if board.castling() & bit != 0 && !castle_rights_intact(board, color, side) {
            board.clear_castling_bits(bit);
        }
    }
}
