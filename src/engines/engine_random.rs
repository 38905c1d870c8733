//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and doubles as the fallback drivers use
//! when a search strategy returns no move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineConfig, EngineOutput};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            rng: config.rng(),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "RayChess Random"
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
        _game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move_and_none_from_an_empty_list() {
        let config = EngineConfig {
            seed: Some(1),
            ..EngineConfig::default()
        };
        let mut engine = RandomEngine::new(config);
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();

        let out = engine
            .choose_move(&mut game, &moves)
            .expect("random engine should not fail");
        let picked = out.best_move.expect("a move should be chosen");
        assert!(moves.contains(&picked));

        let out = engine
            .choose_move(&mut game, &[])
            .expect("random engine should not fail");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn new_game_replays_a_seeded_sequence() {
        let config = EngineConfig {
            seed: Some(99),
            ..EngineConfig::default()
        };
        let mut engine = RandomEngine::new(config);
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();

        let first: Vec<_> = (0..5)
            .filter_map(|_| engine.choose_move(&mut game, &moves).ok()?.best_move)
            .collect();
        engine.new_game();
        let second: Vec<_> = (0..5)
            .filter_map(|_| engine.choose_move(&mut game, &moves).ok()?.best_move)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
