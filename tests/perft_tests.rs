//! Move-count-by-depth regression check from the starting position. Not
//! named in the design's scenario list, but the standard way every engine
//! in the retrieval pack catches a move-generation regression the targeted
//! scenarios wouldn't. Exercises the crate entirely through its public
//! surface: enumerate legal moves by probing every target square through
//! the Attacker Generator and Legality Filter, the same way
//! `status::has_any_legal_move` does internally.

use chesscore::board::Board;
use chesscore::geometry::{file_of, rank_of};
use chesscore::moves::apply_move;
use chesscore::moves::attackers::attackers_of;
use chesscore::moves::legality::is_legal;
use chesscore::moves::special::can_castle;
use chesscore::moves::types::MoveIntent;
use chesscore::piece::{self, Piece, kind};

/// Installs a `tracing` subscriber writing to the test harness's captured
/// output, so `RUST_LOG=chesscore=trace cargo test -- --nocapture` surfaces
/// the `#[instrument]`ed spans in `status`/`lib` while chasing a perft
/// mismatch. Idempotent across the several `#[test]` fns in this file.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn legal_moves(board: &Board) -> Vec<MoveIntent> {
    let side = board.side_to_move();
    let mut moves = Vec::new();
    for target in 0..64u8 {
        for candidate in &attackers_of(board, target, kind::ALL, side) {
            if let Some(castle_side) = candidate.castle_side {
                if can_castle(board, side, castle_side) {
                    moves.push(MoveIntent::Castle(castle_side));
                }
                continue;
            }
            if !is_legal(board, candidate, target) {
                continue;
            }
            let src_file = Some(file_of(candidate.from) as u8);
            let src_rank = Some(rank_of(candidate.from) as u8);
            let (piece_kind, _) = piece::decode(board.piece_at(candidate.from));
            if candidate.promotes {
                for promotion in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
                    moves.push(MoveIntent::Normal { piece: piece_kind, src_file, src_rank, dest: target, promotion });
                }
            } else {
                moves.push(MoveIntent::Normal {
                    piece: piece_kind,
                    src_file,
                    src_rank,
                    dest: target,
                    promotion: Piece::Queen,
                });
            }
        }
    }
    moves
}

fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in legal_moves(board) {
        let mut next = board.clone();
        if apply_move(&mut next, mv).is_ok() {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

#[test]
fn perft_depth_1_from_start_position() {
    init_tracing();
    assert_eq!(perft(&Board::default_board(), 1), 20);
}

#[test]
fn perft_depth_2_from_start_position() {
    init_tracing();
    assert_eq!(perft(&Board::default_board(), 2), 400);
}

#[test]
fn perft_depth_3_from_start_position() {
    init_tracing();
    assert_eq!(perft(&Board::default_board(), 3), 8_902);
}
