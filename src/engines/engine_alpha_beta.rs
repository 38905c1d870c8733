//! Default playing engine: negamax with alpha-beta pruning over a shuffled
//! root.

use rand::rngs::StdRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineConfig, EngineOutput};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::negamax_alpha_beta::alpha_beta_search;

pub struct AlphaBetaEngine<S: BoardScorer = PositionalScorer> {
    config: EngineConfig,
    rng: StdRng,
    scorer: S,
}

impl AlphaBetaEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(config: EngineConfig, scorer: S) -> Self {
        Self {
            config,
            rng: config.rng(),
            scorer,
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "RayChess AlphaBeta"
    }

    fn new_game(&mut self) {
        self.rng = self.config.rng();
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.config.apply_option(name, value)?;
        self.rng = self.config.rng();
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let result = alpha_beta_search(
            game_state,
            legal_moves,
            &self.scorer,
            self.config.search_config(),
            &mut self.rng,
        )?;
        tracing::info!(
            "alpha_beta depth {} searched {} nodes",
            self.config.depth,
            result.nodes
        );
        Ok(EngineOutput::from_search(
            "alpha_beta_engine",
            legal_moves.len(),
            Some(self.config.depth),
            result,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_negamax::NegamaxEngine;

    #[test]
    fn scores_match_the_unpruned_engine() {
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();
        let config = EngineConfig {
            depth: 2,
            seed: Some(12),
        };
        let pruned = AlphaBetaEngine::new(config)
            .choose_move(&mut game, &moves)
            .expect("search should run");
        let plain = NegamaxEngine::new(config)
            .choose_move(&mut game, &moves)
            .expect("search should run");
        let (Some(a), Some(b)) = (pruned.score, plain.score) else {
            panic!("both engines should report a score");
        };
        assert!((a - b).abs() < 1e-9);
        assert!(pruned.nodes <= plain.nodes);
        assert!(pruned.best_move.is_some());
    }

    #[test]
    fn depth_option_reaches_the_search() {
        let mut engine = AlphaBetaEngine::default();
        engine.set_option("Depth", "1").expect("depth should parse");
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();
        let out = engine
            .choose_move(&mut game, &moves)
            .expect("search should run");
        // One ply: each root move is one node.
        assert_eq!(out.nodes, 20);
        assert!(out.info_lines.iter().any(|line| line.contains("depth 1")));
    }
}
