//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by the game state, the
//! coordinate helpers and the engines. Checkmate and stalemate are *not*
//! errors: they are reported as an empty legal-move list plus the matching
//! flag on `GameState`.
//!
//! Usage guidelines:
//! - Caller-contract violations (undo with no history, moving from an empty
//!   square or with the wrong side) fail fast with a dedicated variant rather
//!   than being silently ignored.
//! - Parsing variants (`InvalidAlgebraic`, `InvalidBoardDiagram`) are
//!   recoverable and suitable for presenting to end users.
//! - Configuration variants come from `Engine::set_option` and strategy name
//!   parsing.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// `undo_move` was called with an empty move log.
    #[error("there is no move to undo")]
    NothingToUndo,

    /// `redo_move` was called with an empty redo stack.
    #[error("there is no move to redo")]
    NothingToRedo,

    /// `make_move` was handed a move whose start square holds no piece.
    #[error("no piece on start square {0}")]
    EmptyStartSquare(Square),

    /// `make_move` was handed a move for the side that is not on turn.
    #[error("piece on {0} does not belong to the side to move")]
    NotSideToMove(Square),

    /// A move that is not in the current legal-move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A square or move string that is not valid algebraic notation.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A board diagram that could not be interpreted.
    #[error("invalid board diagram: {0}")]
    InvalidBoardDiagram(String),

    /// A position without exactly one king per side.
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    /// An engine option name that no engine understands.
    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    /// An engine option value that could not be parsed.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// A strategy name that does not map to any engine.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
