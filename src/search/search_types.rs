//! Configuration and result types shared by every search strategy.

use crate::game_state::chess_move::Move;

/// Plies searched when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead. Zero is searched as one.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub(crate) fn effective_depth(&self) -> u8 {
        self.depth.max(1)
    }
}

/// Outcome of one root search.
///
/// `best_score` is from the perspective of the side that was to move at the
/// root. `best_move` is `None` when no candidate beat the worst possible
/// score, which happens when every move loses to mate; drivers then fall
/// back to a random legal move.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    pub nodes: u64,
}
