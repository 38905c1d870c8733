//! 8x8 mailbox board.
//!
//! Row 0 is rank 8 (Black's back rank), row 7 is rank 1. Each cell holds an
//! `Option<Piece>`; `None` is an empty square.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Dark, *kind));
            board.cells[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::Light, *kind));
        }
        board
    }

    /// Parse an 8-line diagram, rank 8 first. Letters follow the usual
    /// convention (upper case White, lower case Black); `.` or `-` marks an
    /// empty square. Whitespace inside a line is ignored.
    ///
    /// ```text
    /// r...k..r
    /// ........
    /// ........
    /// ........
    /// ........
    /// ........
    /// ........
    /// R...K..R
    /// ```
    pub fn from_diagram(diagram: &str) -> ChessResult<Self> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidBoardDiagram(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(ChessError::InvalidBoardDiagram(format!(
                    "row {} has {} squares: {line:?}",
                    row + 1,
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                board.cells[row][col] = match ch {
                    '.' | '-' => None,
                    _ => Some(Piece::from_char(ch).ok_or_else(|| {
                        ChessError::InvalidBoardDiagram(format!("unknown piece {ch:?}"))
                    })?),
                };
            }
        }
        Ok(board)
    }

    /// Inverse of `from_diagram`.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in &self.cells {
            for cell in row {
                out.push(cell.map_or('.', Piece::to_char));
            }
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every occupied square with its piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }

    pub fn find_kings(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(square, _)| square)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
