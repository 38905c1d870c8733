//! Core incremental game state.
//!
//! `GameState` owns the board exclusively and is mutated in place by
//! `make_move`/`undo_move`/`redo_move` (see `move_generation::legal_move_apply`).
//! Alongside the board it keeps the move log, the redo stack, per-ply history
//! of en-passant targets and castling rights, both king squares, and the
//! transient check/pin data refreshed by `get_valid_moves`.
//!
//! Invariants maintained by every mutator:
//! - exactly one king per color, and `king_squares` always matches the board;
//! - `move_log.len() == castling_rights_log.len() - 1 == en_passant_log.len() - 1`;
//! - `checkmate` and `stalemate` are never both set.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::move_generation::legal_move_checks::{Check, Pin};

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // --- History ---
    pub(crate) move_log: Vec<Move>,
    pub(crate) redo_stack: Vec<Move>,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) castling_rights_log: Vec<CastlingRights>,

    // [color]
    pub(crate) king_squares: [Square; 2],

    // --- Check state, refreshed on every move, undo and generation ---
    pub(crate) in_check: bool,
    pub(crate) checks: Vec<Check>,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        Self::with_board(
            Board::starting_position(),
            Color::Light,
            CastlingRights::ALL,
            [Square::new(7, 4), Square::new(0, 4)],
        )
    }

    /// Build an arbitrary position. Castling rights for a king or rook that is
    /// not on its home square are dropped so later generation stays sound.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let light_king = single_king(&board, Color::Light)?;
        let dark_king = single_king(&board, Color::Dark)?;
        let castling_rights = sanitize_castling_rights(&board, castling_rights);
        Ok(Self::with_board(
            board,
            side_to_move,
            castling_rights,
            [light_king, dark_king],
        ))
    }

    /// Parse a diagram (see `Board::from_diagram`) and build the position.
    pub fn from_diagram(
        diagram: &str,
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        Self::from_position(Board::from_diagram(diagram)?, side_to_move, castling_rights)
    }

    /// Same position with `square` recorded as the en-passant target, as if
    /// the opponent had just advanced a pawn two squares past it.
    pub fn with_en_passant_target(mut self, square: Square) -> Self {
        self.en_passant_square = Some(square);
        if let Some(last) = self.en_passant_log.last_mut() {
            *last = Some(square);
        }
        self
    }

    /// Restore the standard initial position in place.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    fn with_board(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        king_squares: [Square; 2],
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            redo_stack: Vec::new(),
            en_passant_square: None,
            en_passant_log: vec![None],
            castling_rights,
            castling_rights_log: vec![castling_rights],
            king_squares,
            in_check: false,
            checks: Vec::new(),
            pins: Vec::new(),
            checkmate: false,
            stalemate: false,
        };
        state.refresh_check_state();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::Light
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Whether the side to move is in check. Kept current by every make,
    /// undo, redo and `get_valid_moves`.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Meaningful right after `get_valid_moves` returned an empty list.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Meaningful right after `get_valid_moves` returned an empty list.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Snapshot of everything a make/undo pair must leave untouched.
    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            king_squares: self.king_squares,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Comparable copy of the position-defining fields of a `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub king_squares: [Square; 2],
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    match board.find_kings(color).as_slice() {
        [square] => Ok(*square),
        kings => Err(ChessError::KingCount {
            color,
            count: kings.len(),
        }),
    }
}

fn sanitize_castling_rights(board: &Board, rights: CastlingRights) -> CastlingRights {
    use crate::game_state::chess_types::PieceKind;

    let mut rights = rights;
    for color in [Color::Light, Color::Dark] {
        let row = color.back_row();
        let home = |col: u8, kind: PieceKind| {
            board
                .get(Square::new(row, col))
                .is_some_and(|piece| piece.is(color, kind))
        };
        if !home(4, PieceKind::King) {
            rights = rights.without_color(color);
        }
        if !home(7, PieceKind::Rook) {
            rights = rights.without(CastlingRights::kingside_flag(color));
        }
        if !home(0, PieceKind::Rook) {
            rights = rights.without(CastlingRights::queenside_flag(color));
        }
    }
    rights
}
