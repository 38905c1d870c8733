//! Perft: exhaustive legal-move tree walk used to validate generation.
//!
//! Counters follow the usual perft tables: every statistic is taken on the
//! leaf moves only. Promotions always queen, so positions with promotions
//! inside the horizon count one node per promotion instead of four.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub double_checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Walk every legal line `depth` plies deep from the current position. The
/// state is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_valid_moves() {
        total.merge(perft_recurse(game_state, mv, depth)?);
    }
    Ok(total)
}

/// Node count below each root move, keyed by its square-pair notation.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> ChessResult<Vec<(String, u64)>> {
    let mut split = Vec::new();
    if depth == 0 {
        return Ok(split);
    }
    for mv in game_state.get_valid_moves() {
        let counts = perft_recurse(game_state, mv, depth)?;
        tracing::debug!("{}: {}", mv.chess_notation(), counts.nodes);
        split.push((mv.chess_notation(), counts.nodes));
    }
    Ok(split)
}

/// Play `mv` and count the subtree `remaining` plies deep including it.
fn perft_recurse(game_state: &mut GameState, mv: Move, remaining: u8) -> ChessResult<PerftCounts> {
    game_state.push_move(mv)?;

    let mut counts = PerftCounts::default();
    if remaining == 1 {
        counts.nodes = 1;
        let played = game_state.last_move().copied().unwrap_or(mv);
        if played.is_capture() {
            counts.captures = 1;
        }
        if played.is_en_passant() {
            counts.en_passant = 1;
        }
        if played.is_castle() {
            counts.castles = 1;
        }
        if played.is_promotion() {
            counts.promotions = 1;
        }
        if played.is_check() {
            counts.checks = 1;
            if game_state.find_pins_and_checks().checks.len() > 1 {
                counts.double_checks = 1;
            }
            if game_state.get_valid_moves().is_empty() {
                counts.checkmates = 1;
            }
        }
    } else {
        for child in game_state.get_valid_moves() {
            counts.merge(perft_recurse(game_state, child, remaining - 1)?);
        }
    }

    game_state.pop_move()?;
    Ok(counts)
}
