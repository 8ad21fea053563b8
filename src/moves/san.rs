//! Standard Algebraic Notation parser: turns a token like `Nf3`, `exd6`,
//! `Qh4e1`, `O-O`, or `e8=Q` into a [`MoveIntent`]. Disambiguation against
//! the board's legal candidates happens downstream in the Move Executor —
//! this module only decodes the token itself.

use crate::board::CastleSide;
use crate::error::MoveError;
use crate::piece::Piece;

use super::special::DEFAULT_PROMOTION;
use super::types::MoveIntent;

/// Parses one SAN token into a [`MoveIntent`] by scanning left-to-right: a
/// leading piece letter selects the kind (pawn default); each file/rank
/// character shifts the previous destination digit into the source slot;
/// a piece letter after the destination selects a promotion; `+`, `#`,
/// `x`, `=` are ignored as punctuation.
pub fn parse_san(token: &str) -> Result<MoveIntent, MoveError> {
    if token == "O-O" {
        return Ok(MoveIntent::Castle(CastleSide::Kingside));
    }
    if token == "O-O-O" {
        return Ok(MoveIntent::Castle(CastleSide::Queenside));
    }

    let mut chars = token.chars().peekable();
    let piece = match chars.peek() {
        Some(&c) if Piece::from_san_letter(c).is_some() => {
            let p = Piece::from_san_letter(c).unwrap();
            chars.next();
            p
        }
        _ => Piece::Pawn,
    };

    let mut dest_file: Option<u8> = None;
    let mut dest_rank: Option<u8> = None;
    let mut src_file: Option<u8> = None;
    let mut src_rank: Option<u8> = None;
    let mut promotion = DEFAULT_PROMOTION;
    let mut destination_reached = false;

    for c in chars {
        match c {
            'a'..='h' => {
                if let Some(previous) = dest_file {
                    src_file = Some(previous);
                }
                dest_file = Some(c as u8 - b'a');
            }
            '1'..='8' => {
                if let Some(previous) = dest_rank {
                    src_rank = Some(previous);
                }
                dest_rank = Some(c as u8 - b'1');
                destination_reached = true;
            }
            'B' | 'N' | 'R' | 'Q' if destination_reached => {
                if let Some(p) = Piece::from_san_letter(c) {
                    promotion = p;
                }
            }
            '+' | '#' | 'x' | '=' => {}
            _ => {}
        }
    }

    let (file, rank) = match (dest_file, dest_rank) {
        (Some(f), Some(r)) => (f, r),
        _ => return Err(MoveError::InvalidMove),
    };

    // Destination = rank*8 + file, with rank counted a8=0 top-down: a SAN
    // rank digit '1'..'8' maps to board rank-from-top via 8 - digit.
    let rank_from_top = 7 - rank;
    let dest = rank_from_top * 8 + file;

    Ok(MoveIntent::Normal {
        piece,
        src_file,
        src_rank: src_rank.map(|r| 7 - r),
        dest,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pawn_push() {
        let intent = parse_san("e4").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Pawn,
                src_file: None,
                src_rank: None,
                dest: 36,
                promotion: DEFAULT_PROMOTION,
            }
        );
    }

    #[test]
    fn parses_knight_move() {
        let intent = parse_san("Nf3").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Knight,
                src_file: None,
                src_rank: None,
                dest: 45,
                promotion: DEFAULT_PROMOTION,
            }
        );
    }

    #[test]
    fn parses_pawn_capture_with_source_file() {
        let intent = parse_san("exd6").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Pawn,
                src_file: Some(4),
                src_rank: None,
                dest: 19,
                promotion: DEFAULT_PROMOTION,
            }
        );
    }

    #[test]
    fn parses_fully_disambiguated_queen_move() {
        let intent = parse_san("Qh4e1").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Queen,
                src_file: Some(7),
                src_rank: Some(4),
                dest: 60,
                promotion: DEFAULT_PROMOTION,
            }
        );
    }

    #[test]
    fn parses_castling_tokens() {
        assert_eq!(parse_san("O-O").unwrap(), MoveIntent::Castle(CastleSide::Kingside));
        assert_eq!(parse_san("O-O-O").unwrap(), MoveIntent::Castle(CastleSide::Queenside));
    }

    #[test]
    fn parses_promotion_with_check_and_capture_markers() {
        let intent = parse_san("dxe8=Q#").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Pawn,
                src_file: Some(3),
                src_rank: None,
                dest: 4,
                promotion: Piece::Queen,
            }
        );
    }

    #[test]
    fn parses_plain_promotion() {
        let intent = parse_san("a8=Q").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Pawn,
                src_file: None,
                src_rank: None,
                dest: 0,
                promotion: Piece::Queen,
            }
        );
    }

    #[test]
    fn rejects_token_with_no_destination() {
        assert!(parse_san("N").is_err());
    }

    #[test]
    fn king_letter_after_destination_is_not_a_promotion() {
        // "K" is not a legal promotion piece; the parser treats it as stray
        // punctuation and falls back to the default promotion rather than
        // producing a king promotion.
        let intent = parse_san("e8=K").unwrap();
        assert_eq!(
            intent,
            MoveIntent::Normal {
                piece: Piece::Pawn,
                src_file: None,
                src_rank: None,
                dest: 4,
                promotion: DEFAULT_PROMOTION,
            }
        );
    }
}
