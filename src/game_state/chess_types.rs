//! Primitive chess types shared by every subsystem.
//!
//! Squares use `(row, col)` coordinates with row 0 being Black's back rank
//! (rank 8) and col 0 the a-file, matching the 8x8 mailbox in `board`.

use std::fmt;

use crate::utils::algebraic::square_to_algebraic;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn push for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row holding this color's pawns before they have moved.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row where this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// `+1` for Light, `-1` for Dark; used to turn Light-relative scores
    /// into side-relative ones.
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Color::Light => 1.0,
            Color::Dark => -1.0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("white"),
            Color::Dark => f.write_str("black"),
        }
    }
}

/// Piece kind (color is carried separately in `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used in move notation and diagrams.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty squares are `None` in the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Diagram letter: upper case for Light, lower case for Dark.
    pub fn to_char(self) -> char {
        match self.color {
            Color::Light => self.kind.letter(),
            Color::Dark => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self::new(color, kind))
    }
}

/// Board square as `(row, col)`, both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Callers must pass coordinates in `0..8`; see `Square::try_new` for a
    /// checked variant.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The square `steps` steps away along `direction`, if it is on the board.
    #[inline]
    pub fn offset(self, direction: Direction, steps: i8) -> Option<Self> {
        Self::try_new(
            self.row as i8 + direction.d_row * steps,
            self.col as i8 + direction.d_col * steps,
        )
    }

    /// Identity key contribution used by `Move::move_id`.
    #[inline]
    pub(crate) const fn key(self) -> u16 {
        self.row as u16 * 10 + self.col as u16
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// Unit step on the board. Orthogonal and diagonal rays plus knight jumps
/// all use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            d_row: -self.d_row,
            d_col: -self.d_col,
        }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        self.d_row == 0 || self.d_col == 0
    }

    /// True if `self` runs along the same line as `other`, in either sense.
    #[inline]
    pub fn is_parallel_to(self, other: Direction) -> bool {
        self == other || self == other.reversed()
    }
}

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

/// Orthogonal rays first, then diagonals.
pub const KING_DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(2, -1),
    Direction::new(2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, 2),
    Direction::new(1, -2),
];
