//! Conversions between `(row, col)` squares and algebraic coordinates.
//!
//! Files `a..h` map to columns `0..7`; ranks `1..8` map to rows `7..0`, so
//! row 0 is the eighth rank.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

#[inline]
pub fn col_to_file(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn row_to_rank(row: u8) -> char {
    char::from(b'8' - row)
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(col_to_file(square.col));
    out.push(row_to_rank(square.row));
    out
}

/// Split a square pair such as "e2e4" into its start and end squares.
pub fn algebraic_to_square_pair(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    Ok((algebraic_to_square(&text[..2])?, algebraic_to_square(&text[2..])?))
}
