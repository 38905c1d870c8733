//! Positional bonus tables, indexed `[row][col]` with row 0 at rank 8.
//!
//! Knight, bishop, rook and queen tables are vertically symmetric and shared
//! by both colors. Pawns use a White table that rewards advancing towards
//! row 0; the Black table is the same table read upside down.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub type PieceSquareTable = [[u8; 8]; 8];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

pub const LIGHT_PAWN_TABLE: PieceSquareTable = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Positional bonus for `piece` standing on `square`. Kings have no table.
#[inline]
pub fn piece_square_value(piece: Piece, square: Square) -> u8 {
    let row = square.row as usize;
    let col = square.col as usize;
    match piece.kind {
        PieceKind::Pawn => match piece.color {
            Color::Light => LIGHT_PAWN_TABLE[row][col],
            Color::Dark => LIGHT_PAWN_TABLE[7 - row][col],
        },
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_TABLE[row][col],
        PieceKind::King => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_tables_mirror_by_color() {
        let light = Piece::new(Color::Light, PieceKind::Pawn);
        let dark = Piece::new(Color::Dark, PieceKind::Pawn);
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(
                    piece_square_value(light, Square::new(row, col)),
                    piece_square_value(dark, Square::new(7 - row, col))
                );
            }
        }
        // Advanced pawns are worth more than pawns at home.
        assert!(
            piece_square_value(dark, Square::new(6, 3)) > piece_square_value(dark, Square::new(1, 3))
        );
    }

    #[test]
    fn shared_tables_are_vertically_symmetric() {
        for table in [KNIGHT_TABLE, BISHOP_TABLE, ROOK_TABLE, QUEEN_TABLE] {
            for row in 0..8 {
                assert_eq!(table[row], table[7 - row]);
            }
        }
    }

    #[test]
    fn kings_have_no_positional_value() {
        let king = Piece::new(Color::Light, PieceKind::King);
        assert_eq!(piece_square_value(king, Square::new(7, 4)), 0);
    }
}
