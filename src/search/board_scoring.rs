//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to `BoardScorer`. Scores are White-relative: positive favors
//! White whoever is to move, and searches convert with `Color::sign`.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::tables::piece_square_tables::piece_square_value;

pub const CHECKMATE: f64 = 1000.0;
pub const STALEMATE: f64 = 0.0;

/// Weight of one positional table point relative to one pawn.
pub const POSITIONAL_WEIGHT: f64 = 0.1;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    ///
    /// Terminal flags are read from the state, so callers must have run
    /// `get_valid_moves` on the position first.
    fn score(&self, game_state: &GameState) -> f64;

    /// Score from `color`'s perspective.
    #[inline]
    fn score_for(&self, game_state: &GameState, color: Color) -> f64 {
        color.sign() * self.score(game_state)
    }
}

/// Mate is bad for the side to move, stalemate is level.
#[inline]
pub fn terminal_score(game_state: &GameState) -> Option<f64> {
    if game_state.is_checkmate() {
        Some(-game_state.side_to_move().sign() * CHECKMATE)
    } else if game_state.is_stalemate() {
        Some(STALEMATE)
    } else {
        None
    }
}

#[inline]
pub const fn material_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }
        let mut totals = [0.0f64; 2];
        for (_, piece) in game_state.board().pieces() {
            totals[piece.color.index()] += material_value(piece.kind);
        }
        totals[Color::Light.index()] - totals[Color::Dark.index()]
    }
}

/// Material plus a tenth of a pawn per piece-square table point. This is the
/// scorer every search strategy uses by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }
        let mut totals = [0.0f64; 2];
        for (square, piece) in game_state.board().pieces() {
            if piece.kind == PieceKind::King {
                continue;
            }
            totals[piece.color.index()] += material_value(piece.kind)
                + POSITIONAL_WEIGHT * f64::from(piece_square_value(piece, square));
        }
        totals[Color::Light.index()] - totals[Color::Dark.index()]
    }
}
