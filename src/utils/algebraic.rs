//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values reused by the FEN, notation and long-algebraic components.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Square::at(rank - b'1', file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_to_char(square.file()), rank_to_char(square.rank()))
}

#[inline]
pub fn file_to_char(file: u8) -> char {
    char::from(b'a' + file)
}

#[inline]
pub fn rank_to_char(rank: u8) -> char {
    char::from(b'1' + rank)
}

/// File index of an `a`..`h` letter.
#[inline]
pub fn char_to_file(ch: char) -> Option<u8> {
    match ch {
        'a'..='h' => Some(ch as u8 - b'a'),
        _ => None,
    }
}
