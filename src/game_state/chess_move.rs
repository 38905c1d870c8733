//! Immutable description of one ply.
//!
//! A `Move` records its squares, the piece that moved, the piece it removed
//! (for en passant, the pawn actually taken rather than the empty landing
//! square) and the special-move flags. Equality and hashing use only the
//! four coordinates, so a move built from a clicked square pair compares
//! equal to the generated legal move with the same squares.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::{col_to_file, square_to_algebraic};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_en_passant: bool,
    is_promotion: bool,
    is_castle: bool,
    is_check: bool,
}

impl Move {
    /// Ordinary move or capture; the captured piece is read from `end`.
    ///
    /// Returns `None` when `start` is empty.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.get(start)?;
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == piece_moved.color.promotion_row();
        Some(Self {
            start,
            end,
            piece_moved,
            piece_captured: board.get(end),
            is_en_passant: false,
            is_promotion,
            is_castle: false,
            is_check: false,
        })
    }

    pub(crate) fn en_passant(start: Square, end: Square, pawn: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: pawn,
            piece_captured: Some(Piece::new(pawn.color.opposite(), PieceKind::Pawn)),
            is_en_passant: true,
            is_promotion: false,
            is_castle: false,
            is_check: false,
        }
    }

    pub(crate) fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            is_en_passant: false,
            is_promotion: false,
            is_castle: true,
            is_check: false,
        }
    }

    /// Same move, stamped with whether it gives check.
    #[inline]
    pub(crate) fn with_check(self, is_check: bool) -> Self {
        Self { is_check, ..self }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// Set once the move has been played; generated moves report `false`.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    /// Identity key built from the four coordinates.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.start.key() * 100 + self.end.key()
    }

    /// Square pair such as `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

/// Short notation: `o-o`/`o-o-o` for castling, piece letter for non-pawns,
/// start file plus `x` for pawn captures, trailing `Q` for promotion and `+`
/// for check.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            f.write_str(if self.end.col == 6 { "o-o" } else { "o-o-o" })?;
        } else {
            let end = square_to_algebraic(self.end);
            match self.piece_moved.kind {
                PieceKind::Pawn => {
                    if self.is_capture() {
                        write!(f, "{}x", col_to_file(self.start.col))?;
                    }
                    f.write_str(&end)?;
                    if self.is_promotion {
                        f.write_str("Q")?;
                    }
                }
                kind => {
                    write!(f, "{}", kind.letter())?;
                    if self.is_capture() {
                        f.write_str("x")?;
                    }
                    f.write_str(&end)?;
                }
            }
        }
        if self.is_check {
            f.write_str("+")?;
        }
        Ok(())
    }
}
