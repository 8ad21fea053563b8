//! Termination detection: checkmate, stalemate (including the
//! insufficient-material shortcut), the fifty-move rule, and threefold
//! repetition, evaluated in that priority order with early exit.

use crate::board::Board;
use crate::error::CoreError;
use crate::moves::attackers::attackers_of;
use crate::moves::legality::{is_attacked, is_legal};
use crate::moves::special::can_castle;
use crate::piece::{self, Color, kind};

/// Discriminants: 0 = ongoing, 1 = checkmate, 2 = stalemate, 3 = fifty-move,
/// 4 = threefold repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing = 0,
    Checkmate = 1,
    Stalemate = 2,
    FiftyMove = 3,
    Threefold = 4,
}

/// Classifies the current position. Side to move is whoever `board` says
/// is to move; checkmate/stalemate are always evaluated against that side.
#[tracing::instrument(level = "debug", skip(board))]
pub fn game_status(board: &Board) -> GameStatus {
    if board.history_is_full() || board.repetition_log_is_full() {
        tracing::debug!("buffer overflow treated as stalemate-class terminal");
        return GameStatus::Stalemate;
    }

    let side = board.side_to_move();
    let king_square = board.king_square(side);
    let king_attacked = is_attacked(board, king_square);
    let has_move = has_any_legal_move(board);

    let status = if !has_move && king_attacked {
        GameStatus::Checkmate
    } else if !has_move && !king_attacked {
        GameStatus::Stalemate
    } else if is_insufficient_material(board) {
        GameStatus::Stalemate
    } else if board.halfmoves() >= 100 {
        GameStatus::FiftyMove
    } else if board.max_repetition_count() >= 3 {
        GameStatus::Threefold
    } else {
        GameStatus::Ongoing
    };

    tracing::debug!(?status, "classified position");
    status
}

/// Existence test: does any piece belonging to the side to move have at
/// least one legal destination? Iterates every target square, asks the
/// Attacker Generator for any-kind same-side candidates, and runs each
/// through the Legality Filter (castling candidates through the fuller
/// `can_castle` check instead, since legality alone doesn't re-verify
/// transit-square occupancy).
fn has_any_legal_move(board: &Board) -> bool {
    let side = board.side_to_move();
    for target in 0..64u8 {
        let candidates = attackers_of(board, target, kind::ALL, side);
        for candidate in &candidates {
            let survives = match candidate.castle_side {
                Some(castle_side) => can_castle(board, side, castle_side),
                None => is_legal(board, candidate, target),
            };
            if survives {
                return true;
            }
        }
    }
    false
}

/// Neither side has a pawn, rook, or queen, and each side has at most one
/// minor piece. Does not special-case same-square-colour bishop draws —
/// see DESIGN.md.
fn is_insufficient_material(board: &Board) -> bool {
    let heavy_or_pawn = kind::PAWN | kind::ROOK | kind::QUEEN;
    for square in 0..64u8 {
        let code = board.piece_at(square);
        if piece::contains_kind(code, heavy_or_pawn) {
            return false;
        }
    }
    for color in [Color::White, Color::Black] {
        let minors = (0..64u8)
            .filter(|&sq| {
                let code = board.piece_at(sq);
                piece::contains_kind(code, kind::BISHOP | kind::KNIGHT) && piece::is_color(code, color)
            })
            .count();
        if minors > 1 {
            return false;
        }
    }
    true
}

/// Which bounded buffer, if any, has been exhausted. `game_status` already
/// folds this into `Stalemate`; this accessor is for the rare caller that
/// wants to tell the two cases apart.
pub fn overflow_kind(board: &Board) -> Option<CoreError> {
    if board.history_is_full() {
        Some(CoreError::HistoryOverflow)
    } else if board.repetition_log_is_full() {
        Some(CoreError::RepetitionBufferOverflow)
    } else {
        None
    }
}
