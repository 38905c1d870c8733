use rand::rngs::StdRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineConfig, EngineOutput};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::greedy::greedy_search;

/// Plays the move with the best immediate evaluation. Depth is accepted as
/// an option but greedy search always looks one ply ahead.
pub struct GreedyEngine<S: BoardScorer = PositionalScorer> {
    config: EngineConfig,
    rng: StdRng,
    scorer: S,
}

impl GreedyEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl<S: BoardScorer> GreedyEngine<S> {
    pub fn with_scorer(config: EngineConfig, scorer: S) -> Self {
        Self {
            config,
            rng: config.rng(),
            scorer,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: BoardScorer> Engine for GreedyEngine<S> {
    fn name(&self) -> &str {
        "RayChess Greedy"
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
        let result = greedy_search(game_state, legal_moves, &self.scorer, &mut self.rng)?;
        Ok(EngineOutput::from_search(
            "greedy_engine",
            legal_moves.len(),
            None,
            result,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::Color;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn captures_the_undefended_rook() {
        let mut game = GameState::from_diagram(
            "....k...
             ........
             ........
             ...r....
             ........
             ........
             ........
             ....K..B",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let moves = game.get_valid_moves();
        let mut engine = GreedyEngine::with_scorer(
            EngineConfig {
                seed: Some(4),
                ..EngineConfig::default()
            },
            MaterialScorer,
        );
        let out = engine
            .choose_move(&mut game, &moves)
            .expect("greedy engine should not fail");
        assert_eq!(
            out.best_move.map(|mv| mv.chess_notation()),
            Some("h1d5".to_owned())
        );
        assert_eq!(out.score, Some(3.0));
        assert!(out.info_lines[0].contains("legal_moves"));
    }
}
