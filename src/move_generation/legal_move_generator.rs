//! Full legal move generation pipeline.
//!
//! Check and pin status is derived once per call by ray casting from the
//! king, instead of playing every candidate and probing the replies:
//! 1. recompute `in_check`, `checks` and `pins`;
//! 2. two or more checkers: only king moves are legal;
//! 3. one checker: keep king moves and moves landing on the block set;
//! 4. no check: every pseudo-legal move stands, pinned pieces having
//!    restricted themselves during generation;
//! 5. an empty result sets `checkmate` or `stalemate`.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;

impl GameState {
    /// Legal moves for the side to move, in generation order (board order,
    /// row 0 first). Updates `checkmate`/`stalemate` as a side effect.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        self.checkmate = false;
        self.stalemate = false;

        self.refresh_check_state();

        let king = self.king_square(self.side_to_move);
        let moves = match self.checks.as_slice() {
            [] => self.pseudo_legal_moves(),
            [check] => {
                let check = *check;
                let block_squares = self.check_block_squares(check);
                let mut moves = self.pseudo_legal_moves();
                moves.retain(|mv| {
                    mv.piece_moved().kind == PieceKind::King
                        || block_squares.contains(&mv.end())
                        || (mv.is_en_passant() && mv.en_passant_capture_square() == check.square)
                });
                moves
            }
            _ => {
                let mut moves = Vec::with_capacity(8);
                self.king_moves(king, &mut moves);
                moves
            }
        };

        if moves.is_empty() {
            if self.in_check {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        }
        moves
    }

    /// The legal move joining `start` and `end`, if there is one. Drivers use
    /// this to validate user input by list membership before `make_move`.
    pub fn legal_move_for(&mut self, start: Square, end: Square) -> Option<Move> {
        self.get_valid_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
    }

    /// Every move of the side to move that respects pins, ignoring checks.
    /// Relies on `pins` having just been refreshed by `get_valid_moves`.
    fn pseudo_legal_moves(&mut self) -> Vec<Move> {
        let ally = self.side_to_move;
        let own_pieces: Vec<(Square, PieceKind)> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.color == ally)
            .map(|(square, piece)| (square, piece.kind))
            .collect();

        let mut moves = Vec::with_capacity(64);
        for (square, kind) in own_pieces {
            match kind {
                PieceKind::Pawn => self.pawn_moves(square, &mut moves),
                PieceKind::Knight => self.knight_moves(square, &mut moves),
                PieceKind::Bishop => self.bishop_moves(square, &mut moves),
                PieceKind::Rook => self.rook_moves(square, &mut moves),
                PieceKind::Queen => self.queen_moves(square, &mut moves),
                PieceKind::King => self.king_moves(square, &mut moves),
            }
        }
        moves
    }
}
