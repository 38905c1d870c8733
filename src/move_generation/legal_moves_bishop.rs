use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Square, DIAGONAL_DIRECTIONS};
use crate::game_state::game_state::GameState;

impl GameState {
    pub(crate) fn bishop_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        let pin = self.take_pin(square);
        self.slide_moves(square, &DIAGONAL_DIRECTIONS, pin, out);
    }
}
