//! Plain minimax with White maximizing and Black minimizing.
//!
//! Interior values stay White-relative; only the root result is converted to
//! the perspective of the side to move.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, CHECKMATE};
use crate::search::search_types::{SearchConfig, SearchResult};

/// Root move order is shuffled, so equal-valued moves are picked at random.
pub fn minimax_search<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    moves: &[Move],
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> ChessResult<SearchResult> {
    let depth = config.effective_depth();
    let sign = game_state.side_to_move().sign();
    let mut ordered = moves.to_vec();
    ordered.shuffle(rng);

    let mut result = SearchResult {
        best_move: None,
        best_score: -CHECKMATE,
        nodes: 0,
    };

    for mv in ordered {
        game_state.push_move(mv)?;
        let value = minimax(game_state, scorer, depth - 1, &mut result.nodes)?;
        game_state.pop_move()?;

        let score = sign * value;
        tracing::debug!("minimax {} scores {score:.2}", mv.chess_notation());
        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(mv);
        }
    }
    Ok(result)
}

fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> ChessResult<f64> {
    *nodes += 1;
    let moves = game_state.get_valid_moves();
    if depth == 0 || moves.is_empty() {
        return Ok(scorer.score(game_state));
    }

    let maximizing = game_state.side_to_move() == Color::Light;
    let mut best = if maximizing { -CHECKMATE } else { CHECKMATE };
    for mv in moves {
        game_state.push_move(mv)?;
        let value = minimax(game_state, scorer, depth - 1, nodes)?;
        game_state.pop_move()?;
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    Ok(best)
}
