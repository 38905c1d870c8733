//! King steps and castling.
//!
//! Each candidate destination is tested by relocating the recorded king
//! square, rescanning for checks, and restoring the original square whatever
//! the outcome. The board itself is never touched.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Piece, PieceKind, Square, KING_DIRECTIONS};
use crate::game_state::game_state::GameState;

impl GameState {
    pub(crate) fn king_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        let ally = self.side_to_move;
        for direction in KING_DIRECTIONS {
            let Some(target) = square.offset(direction, 1) else {
                continue;
            };
            if self.board.get(target).is_some_and(|piece| piece.color == ally) {
                continue;
            }
            if !self.king_would_be_attacked_on(target) {
                out.extend(Move::new(square, target, &self.board));
            }
        }

        self.castle_moves(square, out);
    }

    /// Speculatively place the side-to-move's king on `square` and probe for
    /// checks.
    pub(crate) fn king_would_be_attacked_on(&mut self, square: Square) -> bool {
        let index = self.side_to_move.index();
        let original = self.king_squares[index];
        self.king_squares[index] = square;
        let in_check = self.find_pins_and_checks().in_check;
        self.king_squares[index] = original;
        in_check
    }

    /// Castling needs the right, no current check, an empty path to the rook,
    /// and neither the pass-through square nor the destination attacked.
    fn castle_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        if self.in_check {
            return;
        }

        let ally = self.side_to_move;
        let king = Piece::new(ally, PieceKind::King);
        let row = square.row;

        if self.castling_rights.kingside(ally) {
            let path_clear =
                (square.col + 1..7).all(|col| self.board.is_empty(Square::new(row, col)));
            if path_clear && self.castle_path_is_safe(square, 1) {
                out.push(Move::castle(square, Square::new(row, square.col + 2), king));
            }
        }

        if self.castling_rights.queenside(ally) {
            let path_clear =
                (1..square.col).all(|col| self.board.is_empty(Square::new(row, col)));
            if path_clear && self.castle_path_is_safe(square, -1) {
                out.push(Move::castle(square, Square::new(row, square.col - 2), king));
            }
        }
    }

    /// Probe the squares one and two steps from the king towards the rook.
    fn castle_path_is_safe(&mut self, square: Square, d_col: i8) -> bool {
        for steps in [1, 2] {
            let Some(target) = Square::try_new(square.row as i8, square.col as i8 + d_col * steps)
            else {
                return false;
            };
            if self.king_would_be_attacked_on(target) {
                return false;
            }
        }
        true
    }
}
