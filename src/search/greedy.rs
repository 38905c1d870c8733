//! One-ply greedy search: play each move, score the result, keep the best.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::BoardScorer;
use crate::search::search_types::SearchResult;

/// Best immediate move for the side to move. Equal scores are broken
/// uniformly at random.
pub fn greedy_search<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    moves: &[Move],
    scorer: &S,
    rng: &mut R,
) -> ChessResult<SearchResult> {
    let mover = game_state.side_to_move();
    let mut best_score = f64::NEG_INFINITY;
    let mut best_moves: Vec<Move> = Vec::new();
    let mut nodes = 0u64;

    for &mv in moves {
        game_state.push_move(mv)?;
        game_state.get_valid_moves();
        let score = scorer.score_for(game_state, mover);
        game_state.pop_move()?;
        nodes += 1;

        tracing::debug!("greedy {} scores {score:.2}", mv.chess_notation());
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let best_move = best_moves.choose(rng).copied();
    Ok(SearchResult {
        best_move,
        best_score: if best_move.is_some() { best_score } else { 0.0 },
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::Color;
    use crate::search::board_scoring::{MaterialScorer, PositionalScorer, CHECKMATE};

    #[test]
    fn takes_the_hanging_queen() {
        let mut game = GameState::from_diagram(
            "....k...
             ........
             ........
             ...q....
             ........
             ........
             ........
             ...RK...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let moves = game.get_valid_moves();
        let mut rng = StdRng::seed_from_u64(3);
        let result = greedy_search(&mut game, &moves, &MaterialScorer, &mut rng)
            .expect("search should run");
        let best = result.best_move.expect("a move should be chosen");
        assert_eq!(best.chess_notation(), "d1d5");
        assert_eq!(result.best_score, 5.0);
        assert_eq!(result.nodes, moves.len() as u64);
    }

    #[test]
    fn prefers_mate_in_one() {
        let mut game = GameState::from_diagram(
            "......k.
             .....ppp
             ........
             ........
             ........
             ........
             ........
             R.....K.",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let moves = game.get_valid_moves();
        let mut rng = StdRng::seed_from_u64(5);
        let result = greedy_search(&mut game, &moves, &PositionalScorer, &mut rng)
            .expect("search should run");
        assert_eq!(
            result.best_move.map(|mv| mv.chess_notation()),
            Some("a1a8".to_owned())
        );
        assert_eq!(result.best_score, CHECKMATE);
    }

    #[test]
    fn search_leaves_the_position_untouched() {
        let mut game = GameState::new_game();
        let before = game.snapshot();
        let moves = game.get_valid_moves();
        let mut rng = StdRng::seed_from_u64(9);
        greedy_search(&mut game, &moves, &PositionalScorer, &mut rng).expect("search should run");
        assert_eq!(game.snapshot(), before);
        assert!(game.move_log().is_empty());
    }
}
