//! Negamax with alpha-beta pruning. This is the strategy engines use by
//! default.
//!
//! The root window is the full score range `(-CHECKMATE, CHECKMATE)` and
//! scores are fail-soft, so the root value always equals plain negamax at the
//! same depth; pruning only skips work.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, CHECKMATE};
use crate::search::search_types::{SearchConfig, SearchResult};

/// Root move order is shuffled before searching.
pub fn alpha_beta_search<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    moves: &[Move],
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> ChessResult<SearchResult> {
    let depth = config.effective_depth();
    let mut ordered = moves.to_vec();
    ordered.shuffle(rng);

    let mut alpha = -CHECKMATE;
    let beta = CHECKMATE;
    let mut result = SearchResult {
        best_move: None,
        best_score: -CHECKMATE,
        nodes: 0,
    };

    for mv in ordered {
        game_state.push_move(mv)?;
        let score = -alpha_beta(game_state, scorer, depth - 1, -beta, -alpha, &mut result.nodes)?;
        game_state.pop_move()?;

        tracing::debug!("alpha_beta {} scores {score:.2}", mv.chess_notation());
        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(mv);
        }
        alpha = alpha.max(result.best_score);
        if beta <= alpha {
            break;
        }
    }
    Ok(result)
}

fn alpha_beta<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: f64,
    beta: f64,
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
        let score = -alpha_beta(game_state, scorer, depth - 1, -beta, -alpha, nodes)?;
        game_state.pop_move()?;
        if score > best {
            best = score;
        }
        alpha = alpha.max(best);
        if beta <= alpha {
            break;
        }
    }
    Ok(best)
}
