//! Square arithmetic for the 8x8 mailbox: file/rank bounds and the eight
//! directional offsets moves are built out of.
//!
//! Square indices run 0..=63 with 0 = a8 and 63 = h1 (file = index % 8,
//! rank-from-top = index / 8). Every directional step goes through [`step`],
//! which checks the file/rank gate before trusting the resulting index, so
//! there is exactly one place a wraparound bug could hide.

/// Signed index deltas for the eight compass directions on the mailbox.
pub const UP: i8 = -8;
pub const DOWN: i8 = 8;
pub const LEFT: i8 = -1;
pub const RIGHT: i8 = 1;
pub const UPL: i8 = -9;
pub const UPR: i8 = -7;
pub const DOWNL: i8 = 7;
pub const DOWNR: i8 = 9;

pub const ROOK_DIRECTIONS: [i8; 4] = [UP, DOWN, LEFT, RIGHT];
pub const BISHOP_DIRECTIONS: [i8; 4] = [UPL, UPR, DOWNL, DOWNR];
pub const KING_DIRECTIONS: [i8; 8] = [UP, DOWN, LEFT, RIGHT, UPL, UPR, DOWNL, DOWNR];

/// Knight L-shapes expressed as (file delta, rank delta) pairs.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline(always)]
pub const fn file_of(square: u8) -> i8 {
    (square % 8) as i8
}

#[inline(always)]
pub const fn rank_of(square: u8) -> i8 {
    (square / 8) as i8
}

/// File/rank delta for a named direction.
const fn direction_delta(dir: i8) -> (i8, i8) {
    match dir {
        UP => (0, -1),
        DOWN => (0, 1),
        LEFT => (-1, 0),
        RIGHT => (1, 0),
        UPL => (-1, -1),
        UPR => (1, -1),
        DOWNL => (-1, 1),
        DOWNR => (1, 1),
        _ => panic!("not a direction offset"),
    }
}

/// Steps one square from `square` in `dir`. Returns `None` if the step
/// would cross a file edge or leave the board — the file/rank gate is
/// checked before the resulting index is trusted.
#[inline]
pub fn step(square: u8, dir: i8) -> Option<u8> {
    let (df, dr) = direction_delta(dir);
    offset(square, df, dr)
}

/// Steps one square from `square` by an arbitrary (file, rank) delta,
/// used directly by the knight generator whose deltas aren't one of the
/// eight named directions.
#[inline]
pub fn offset(square: u8, df: i8, dr: i8) -> Option<u8> {
    let file = file_of(square) + df;
    let rank = rank_of(square) + dr;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    let index = rank * 8 + file;
    if !(0..64).contains(&index) {
        return None;
    }
    Some(index as u8)
}

/// Walks a ray from `square` in `dir` until it leaves the board, yielding
/// each square along the way. Used by rook/bishop/queen attacker scans.
pub fn ray(square: u8, dir: i8) -> impl Iterator<Item = u8> {
    let mut current = Some(square);
    std::iter::from_fn(move || {
        current = current.and_then(|sq| step(sq, dir));
        current
    })
}

#[inline]
pub fn algebraic(square: u8) -> String {
    let file = (b'a' + file_of(square) as u8) as char;
    let rank = (b'8' - rank_of(square) as u8) as char;
    format!("{file}{rank}")
}
