//! Types that flow between the SAN parser, the Attacker Generator, and the
//! Move Executor: the parser's structured output (`MoveIntent`) and the
//! generator's structured output (`Candidate`/`Candidates`).

use crate::board::{CastleSide, HistoryEntry};
use crate::piece::Piece;
use arrayvec::ArrayVec;

/// Upper bound on how many same-side pieces can plausibly reach one square
/// in a legal position.
pub const MAX_CANDIDATES: usize = 16;

/// A source square the Attacker Generator considers able to reach a given
/// target, annotated with whatever bookkeeping the Move Executor needs to
/// commit the move atomically. Produced ignoring self-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub from: u8,
    pub is_double_push: bool,
    /// Square that becomes the new en-passant target if this candidate is
    /// played (only set for a pawn double push).
    pub en_passant_target: Option<u8>,
    /// Square of the opponent pawn to clear if this candidate is an
    /// en-passant capture.
    pub en_passant_capture: Option<u8>,
    pub promotes: bool,
    pub castle_side: Option<CastleSide>,
}

impl Candidate {
    pub fn simple(from: u8) -> Candidate {
        Candidate {
            from,
            is_double_push: false,
            en_passant_target: None,
            en_passant_capture: None,
            promotes: false,
            castle_side: None,
        }
    }

    pub fn is_en_passant(&self) -> bool {
        self.en_passant_capture.is_some()
    }
}

pub type Candidates = ArrayVec<Candidate, MAX_CANDIDATES>;

/// Output of the SAN parser / the structured API's input: an intent to
/// move, before the generator has resolved it to an actual source square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Normal {
        piece: Piece,
        src_file: Option<u8>,
        src_rank: Option<u8>,
        dest: u8,
        promotion: Piece,
    },
    Castle(CastleSide),
}

/// What a caller gets back after a move commits. Carries the same detail
/// as a `history[]` entry, since that's exactly what a transcript consumer
/// needs.
pub type MoveRecord = HistoryEntry;
