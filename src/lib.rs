//! Chess rules engine core: mailbox board representation, move generation,
//! legality filtering, special-move handling (castling, en passant,
//! promotion), termination detection, and a Standard Algebraic Notation
//! parser. Synchronous, single-threaded, no I/O — presentation (board
//! rendering), FEN/PGN text formats, UCI transport, and the interactive
//! REPL are collaborators built on top of this crate, not part of it.

pub mod board;
pub mod error;
pub mod geometry;
pub mod moves;
pub mod piece;
pub mod status;

pub use board::Board;
pub use error::{CoreError, MoveError};
pub use moves::{Candidate, Candidates, MoveIntent, MoveRecord, apply_move, parse_san};
pub use status::GameStatus;

/// Parses `token` as SAN and, if it resolves to exactly one legal move,
/// commits it. Combines [`parse_san`] and [`apply_move`] — the external
/// interface named `apply_san` in the design.
#[tracing::instrument(level = "debug", skip(board))]
pub fn apply_san(board: &mut Board, token: &str) -> Result<MoveRecord, MoveError> {
    let intent = parse_san(token)?;
    apply_move(board, intent)
}

/// Classifies the current position: ongoing, checkmate, stalemate, the
/// fifty-move rule, or threefold repetition.
pub fn is_gameover(board: &Board) -> GameStatus {
    status::game_status(board)
}

/// Canonical repetition fingerprint of the current position.
pub fn fingerprint(board: &Board) -> String {
    board::fingerprint::fingerprint(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_san_commits_a_legal_move() {
        let mut board = Board::default_board();
        let record = apply_san(&mut board, "e4").unwrap();
        assert_eq!(record.dest, 36);
        assert_eq!(board.side_to_move(), piece::Color::Black);
    }

    #[test]
    fn apply_san_rejects_illegal_token() {
        let mut board = Board::default_board();
        assert_eq!(apply_san(&mut board, "Qh5"), Err(MoveError::InvalidMove));
    }
}
