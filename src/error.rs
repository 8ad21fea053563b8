//! Typed errors for the two recoverable outcomes of applying a move.
//! Buffer-overflow conditions are not surfaced here — per the design, a
//! move that would overflow the history or repetition log still commits;
//! the overflow is reported the next time [`crate::status::game_status`]
//! is consulted, as a terminal, stalemate-class result.

/// A SAN token or structured intent failed to resolve to exactly one legal
/// move. The board is left unchanged in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no legal move matches this intent")]
    InvalidMove,
    #[error("more than one legal move matches this intent")]
    AmbiguousMove,
}

/// Why a buffer-bound game was forced to terminate. Exposed for callers
/// that want to distinguish the two bounded logs; ordinary play never
/// reaches either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("move history buffer is full")]
    HistoryOverflow,
    #[error("repetition log buffer is full")]
    RepetitionBufferOverflow,
}
