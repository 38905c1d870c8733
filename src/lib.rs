//! Crate root module declarations for the Ray Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! evaluation and search, engines, and utility helpers) so the self-play
//! binary, benches, and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_move;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod greedy;
    pub mod minimax;
    pub mod negamax;
    pub mod negamax_alpha_beta;
    pub mod search_types;
}
pub mod tables {
    pub mod piece_square_tables;
}
pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_select;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
