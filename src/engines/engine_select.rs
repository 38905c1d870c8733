//! Strategy selection by name and the random fallback drivers rely on.

use std::fmt;
use std::str::FromStr;

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineConfig, EngineOutput};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    Random,
    Greedy,
    Minimax,
    Negamax,
    #[default]
    AlphaBeta,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Random,
        StrategyKind::Greedy,
        StrategyKind::Minimax,
        StrategyKind::Negamax,
        StrategyKind::AlphaBeta,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Greedy => "greedy",
            StrategyKind::Minimax => "minimax",
            StrategyKind::Negamax => "negamax",
            StrategyKind::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ChessError::UnknownStrategy(s.to_owned()))
    }
}

pub fn build_engine(kind: StrategyKind, config: EngineConfig) -> Box<dyn Engine> {
    match kind {
        StrategyKind::Random => Box::new(RandomEngine::new(config)),
        StrategyKind::Greedy => Box::new(GreedyEngine::new(config)),
        StrategyKind::Minimax => Box::new(MinimaxEngine::new(config)),
        StrategyKind::Negamax => Box::new(NegamaxEngine::new(config)),
        StrategyKind::AlphaBeta => Box::new(AlphaBetaEngine::new(config)),
    }
}

/// Ask `engine` for a move and fall back to a uniformly random legal move
/// when it has none. Returns `best_move: None` only when `legal_moves` is
/// empty.
pub fn choose_with_fallback<R: Rng + ?Sized>(
    engine: &mut dyn Engine,
    game_state: &mut GameState,
    legal_moves: &[Move],
    rng: &mut R,
) -> ChessResult<EngineOutput> {
    let mut out = engine.choose_move(game_state, legal_moves)?;
    if out.best_move.is_none() {
        out.best_move = legal_moves.choose(rng).copied();
        if let Some(mv) = out.best_move {
            tracing::info!(
                "{} found no move, playing random {}",
                engine.name(),
                mv.chess_notation()
            );
            out.info_lines
                .push(format!("info string fallback random {}", mv.chess_notation()));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::utils::algebraic::algebraic_to_square_pair;

    struct NoMoveEngine;

    impl Engine for NoMoveEngine {
        fn name(&self) -> &str {
            "no-move"
        }

        fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
            Err(ChessError::UnknownOption(name.to_owned()))
        }

        fn choose_move(
            &mut self,
            _game_state: &mut GameState,
            _legal_moves: &[Move],
        ) -> ChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn strategy_names_round_trip_and_accept_variants() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!("Alpha-Beta".parse::<StrategyKind>(), Ok(StrategyKind::AlphaBeta));
        assert_eq!(" NEGAMAX ".parse::<StrategyKind>(), Ok(StrategyKind::Negamax));
        assert_eq!(
            "stockfish".parse::<StrategyKind>(),
            Err(ChessError::UnknownStrategy("stockfish".to_owned()))
        );
    }

    #[test]
    fn every_strategy_returns_a_legal_move() {
        let config = EngineConfig {
            depth: 2,
            seed: Some(3),
        };
        for kind in StrategyKind::ALL {
            let mut engine = build_engine(kind, config);
            let mut game = GameState::new_game();
            let before = game.snapshot();
            let moves = game.get_valid_moves();
            let out = engine
                .choose_move(&mut game, &moves)
                .expect("engine should not fail");
            let mv = out.best_move.expect("opening position always has a move");
            assert!(moves.contains(&mv), "{kind} chose an illegal move");
            assert_eq!(game.snapshot(), before, "{kind} left the board changed");
        }
    }

    #[test]
    fn choosing_a_move_keeps_the_redo_line() {
        let config = EngineConfig {
            depth: 2,
            seed: Some(1),
        };
        for kind in StrategyKind::ALL {
            let mut engine = build_engine(kind, config);
            let mut game = GameState::new_game();
            let moves = game.get_valid_moves();
            engine
                .choose_move(&mut game, &moves)
                .expect("engine should not fail");
            assert!(!game.can_redo(), "{kind} left a move to redo");

            for text in ["e2e4", "e7e5"] {
                let (start, end) =
                    algebraic_to_square_pair(text).expect("square pair should parse");
                let mv = game.legal_move_for(start, end).expect("opening move should be legal");
                game.make_move(mv).expect("move should apply");
            }
            game.undo_move().expect("undo should succeed");
            game.undo_move().expect("undo should succeed");

            let moves = game.get_valid_moves();
            engine
                .choose_move(&mut game, &moves)
                .expect("engine should not fail");
            let first = game.redo_move().expect("redo line should survive");
            let second = game.redo_move().expect("redo line should survive");
            assert_eq!(first.chess_notation(), "e2e4", "{kind}");
            assert_eq!(second.chess_notation(), "e7e5", "{kind}");
            assert!(!game.can_redo());
        }
    }

    #[test]
    fn fallback_plays_a_random_legal_move() {
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();
        let mut rng = StdRng::seed_from_u64(0);
        let out = choose_with_fallback(&mut NoMoveEngine, &mut game, &moves, &mut rng)
            .expect("fallback should not fail");
        let mv = out.best_move.expect("fallback should pick a move");
        assert!(moves.contains(&mv));

        let out = choose_with_fallback(&mut NoMoveEngine, &mut game, &[], &mut rng)
            .expect("fallback should not fail");
        assert_eq!(out.best_move, None);
    }
}
