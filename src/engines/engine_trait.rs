//! Engine abstraction layer used by drivers.
//!
//! Defines the shared configuration and output payloads so different search
//! strategies can be selected at runtime behind a single trait interface.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::search_types::{SearchConfig, SearchResult, DEFAULT_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub depth: u8,
    /// Seed for shuffles and tie-breaks. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Apply a named option. Names are matched case-insensitively.
    pub fn apply_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        if name.eq_ignore_ascii_case("Depth") {
            let depth = value.trim().parse::<u8>().map_err(|_| invalid())?;
            if depth == 0 {
                return Err(invalid());
            }
            self.depth = depth;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Seed") {
            let value = value.trim();
            self.seed = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(value.parse::<u64>().map_err(|_| invalid())?)
            };
            return Ok(());
        }
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    #[inline]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig { depth: self.depth }
    }

    /// Fresh generator for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Search score from the mover's perspective, when the engine scores.
    pub score: Option<f64>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    /// Package a search result with the usual info lines.
    pub(crate) fn from_search(
        tag: &str,
        legal_moves: usize,
        depth: Option<u8>,
        result: SearchResult,
    ) -> Self {
        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            nodes: result.nodes,
            info_lines: Vec::with_capacity(3),
        };
        out.info_lines
            .push(format!("info string {tag} legal_moves {legal_moves}"));
        if let Some(depth) = depth {
            out.info_lines
                .push(format!("info string {tag} depth {depth} nodes {}", result.nodes));
        }
        match result.best_move {
            Some(mv) => out.info_lines.push(format!(
                "info string {tag} best {} score {:.2}",
                mv.chess_notation(),
                result.best_score
            )),
            None => out
                .info_lines
                .push(format!("info string {tag} no_best_move")),
        }
        out
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Forget per-game state. Seeded engines restart their random sequence.
    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()>;

    /// Pick one of `legal_moves` for the side to move. The state is searched
    /// in place and handed back unchanged.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput>;
}
