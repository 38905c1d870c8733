//! Applying and reverting moves in place.
//!
//! `make_move` and `redo_move` share one apply path, so a redone move pushes
//! its log entries exactly like a freshly made one. `undo_move` pops them and
//! parks the move on the redo stack.
//!
//! Search and perft walk the tree with `push_move`/`pop_move`, which skip the
//! redo stack entirely so a user's redo line survives a search.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

impl GameState {
    /// Play `mv` for the side to move.
    ///
    /// Only the start square is validated against the board; callers are
    /// expected to pass a move taken from `get_valid_moves`. Making the move
    /// on top of the redo stack consumes it, any other move discards the
    /// whole redo line.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        self.check_mover(mv)?;

        if self.redo_stack.last() == Some(&mv) {
            self.redo_stack.pop();
        } else {
            self.redo_stack.clear();
        }

        self.apply(mv);
        Ok(())
    }

    /// Take back the last move, returning it.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let mv = self.pop_move()?;
        self.redo_stack.push(mv);
        Ok(mv)
    }

    /// Replay the most recently undone move, returning it.
    pub fn redo_move(&mut self) -> ChessResult<Move> {
        let mv = self.redo_stack.pop().ok_or(ChessError::NothingToRedo)?;
        self.apply(mv);
        Ok(self.last_move().copied().unwrap_or(mv))
    }

    /// `make_move` without touching the redo stack. Pair with `pop_move`.
    pub(crate) fn push_move(&mut self, mv: Move) -> ChessResult<()> {
        self.check_mover(mv)?;
        self.apply(mv);
        Ok(())
    }

    /// `undo_move` without parking the move for redo.
    pub(crate) fn pop_move(&mut self) -> ChessResult<Move> {
        let mv = self.move_log.pop().ok_or(ChessError::NothingToUndo)?;
        let mover = mv.piece_moved().color;

        self.board.set(mv.start(), Some(mv.piece_moved()));
        if mv.is_en_passant() {
            self.board.set(mv.end(), None);
            self.board
                .set(mv.en_passant_capture_square(), mv.piece_captured());
        } else {
            self.board.set(mv.end(), mv.piece_captured());
        }

        if mv.is_castle() {
            let (rook_home, rook_castled) = castle_rook_squares(&mv);
            let rook = self.board.get(rook_castled);
            self.board.set(rook_castled, None);
            self.board.set(rook_home, rook);
        }

        if mv.piece_moved().kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.start();
        }

        self.en_passant_log.pop();
        self.en_passant_square = self.en_passant_log.last().copied().flatten();
        self.castling_rights_log.pop();
        self.castling_rights = self
            .castling_rights_log
            .last()
            .copied()
            .unwrap_or(CastlingRights::NONE);

        self.side_to_move = mover;
        self.checkmate = false;
        self.stalemate = false;
        self.refresh_check_state();

        tracing::trace!("undo {}", mv.chess_notation());
        Ok(mv)
    }

    fn check_mover(&self, mv: Move) -> ChessResult<()> {
        let piece = self
            .board
            .get(mv.start())
            .ok_or(ChessError::EmptyStartSquare(mv.start()))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::NotSideToMove(mv.start()));
        }
        if piece != mv.piece_moved() {
            return Err(ChessError::IllegalMove(mv.chess_notation()));
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) {
        let mover = mv.piece_moved().color;
        let placed = if mv.is_promotion() {
            Piece::new(mover, PieceKind::Queen)
        } else {
            mv.piece_moved()
        };

        self.board.set(mv.start(), None);
        self.board.set(mv.end(), Some(placed));

        if mv.is_en_passant() {
            self.board.set(mv.en_passant_capture_square(), None);
        }

        if mv.is_castle() {
            let (rook_home, rook_castled) = castle_rook_squares(&mv);
            let rook = self.board.get(rook_home);
            self.board.set(rook_home, None);
            self.board.set(rook_castled, rook);
        }

        if mv.piece_moved().kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.end();
        }

        self.side_to_move = mover.opposite();

        // Check is stamped once every board effect is in place.
        let info = self.find_pins_and_checks();
        let gives_check = info.in_check;
        self.in_check = info.in_check;
        self.checks = info.checks;
        self.pins = info.pins;
        let mv = mv.with_check(gives_check);
        self.move_log.push(mv);

        let double_push = mv.piece_moved().kind == PieceKind::Pawn
            && mv.start().row.abs_diff(mv.end().row) == 2;
        self.en_passant_square = double_push
            .then(|| Square::new((mv.start().row + mv.end().row) / 2, mv.start().col));
        self.en_passant_log.push(self.en_passant_square);

        self.castling_rights = revoke_castling_rights(self.castling_rights, &mv);
        self.castling_rights_log.push(self.castling_rights);

        self.checkmate = false;
        self.stalemate = false;

        tracing::trace!(
            "{} played {}{}",
            mover,
            mv.chess_notation(),
            if gives_check { " (check)" } else { "" }
        );
    }
}

/// Rook home square and castled square for a castling move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start().row;
    if mv.end().col > mv.start().col {
        (Square::new(row, 7), Square::new(row, mv.end().col - 1))
    } else {
        (Square::new(row, 0), Square::new(row, mv.end().col + 1))
    }
}

fn revoke_castling_rights(rights: CastlingRights, mv: &Move) -> CastlingRights {
    let mover = mv.piece_moved().color;
    let mut rights = rights;

    match mv.piece_moved().kind {
        PieceKind::King => rights = rights.without_color(mover),
        PieceKind::Rook => rights = rights.without(rook_home_flag(mover, mv.start())),
        _ => {}
    }

    if let Some(captured) = mv.piece_captured() {
        if captured.kind == PieceKind::Rook {
            rights = rights.without(rook_home_flag(captured.color, mv.end()));
        }
    }
    rights
}

/// Flag guarded by a rook of `color` standing on `square`, or no flag at all
/// when `square` is not one of that color's rook home squares.
fn rook_home_flag(color: Color, square: Square) -> u8 {
    if square.row != color.back_row() {
        return 0;
    }
    match square.col {
        0 => CastlingRights::queenside_flag(color),
        7 => CastlingRights::kingside_flag(color),
        _ => 0,
    }
}
