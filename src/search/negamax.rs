//! Negamax: minimax folded onto one maximizing routine by negating the
//! child's score at every ply.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, CHECKMATE};
use crate::search::search_types::{SearchConfig, SearchResult};

/// Moves are searched in the given order; the first of several equal best
/// moves wins.
pub fn negamax_search<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[Move],
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let depth = config.effective_depth();
    let mut result = SearchResult {
        best_move: None,
        best_score: -CHECKMATE,
        nodes: 0,
    };

    for &mv in moves {
        game_state.push_move(mv)?;
        let score = -negamax(game_state, scorer, depth - 1, &mut result.nodes)?;
        game_state.pop_move()?;

        tracing::debug!("negamax {} scores {score:.2}", mv.chess_notation());
        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(mv);
        }
    }
    Ok(result)
}

/// Value of the position for the side to move.
pub(crate) fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> ChessResult<f64> {
    *nodes += 1;
    let moves = game_state.get_valid_moves();
    if depth == 0 || moves.is_empty() {
        return Ok(scorer.score_for(game_state, game_state.side_to_move()));
    }

    let mut best = -CHECKMATE;
    for mv in moves {
        game_state.push_move(mv)?;
        let score = -negamax(game_state, scorer, depth - 1, nodes)?;
        game_state.pop_move()?;
        if score > best {
            best = score;
        }
    }
    Ok(best)
}
