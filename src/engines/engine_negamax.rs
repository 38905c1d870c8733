use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineConfig, EngineOutput};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::negamax::negamax_search;

/// Negamax without pruning. Deterministic: ties go to the earliest legal
/// move, so the seed option is accepted but unused.
pub struct NegamaxEngine<S: BoardScorer = PositionalScorer> {
    config: EngineConfig,
    scorer: S,
}

impl NegamaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl<S: BoardScorer> NegamaxEngine<S> {
    pub fn with_scorer(config: EngineConfig, scorer: S) -> Self {
        Self { config, scorer }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: BoardScorer> Engine for NegamaxEngine<S> {
    fn name(&self) -> &str {
        "RayChess Negamax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.config.apply_option(name, value)
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let result = negamax_search(
            game_state,
            legal_moves,
            &self.scorer,
            self.config.search_config(),
        )?;
        Ok(EngineOutput::from_search(
            "negamax_engine",
            legal_moves.len(),
            Some(self.config.depth),
            result,
        ))
    }
}
