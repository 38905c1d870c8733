use rand::rngs::StdRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineConfig, EngineOutput};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::minimax::minimax_search;

/// Full-width minimax to the configured depth.
pub struct MinimaxEngine<S: BoardScorer = PositionalScorer> {
    config: EngineConfig,
    rng: StdRng,
    scorer: S,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: EngineConfig, scorer: S) -> Self {
        Self {
            config,
            rng: config.rng(),
            scorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "RayChess Minimax"
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
        let result = minimax_search(
            game_state,
            legal_moves,
            &self.scorer,
            self.config.search_config(),
            &mut self.rng,
        )?;
        Ok(EngineOutput::from_search(
            "minimax_engine",
            legal_moves.len(),
            Some(self.config.depth),
            result,
        ))
    }
}
