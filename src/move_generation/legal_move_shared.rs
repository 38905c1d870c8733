use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Direction, Square};
use crate::game_state::game_state::GameState;

impl GameState {
    /// Remove and return the pin entry for `square`, if the piece there is
    /// pinned. Each generator consumes the entry of the square it handles.
    pub(crate) fn take_pin(&mut self, square: Square) -> Option<Direction> {
        let index = self.pins.iter().position(|pin| pin.square == square)?;
        Some(self.pins.swap_remove(index).direction)
    }

    /// Slide from `square` along each of `directions`, stopping before a
    /// friendly piece and after capturing an enemy one. A pinned slider only
    /// keeps the rays parallel to its pin.
    pub(crate) fn slide_moves(
        &self,
        square: Square,
        directions: &[Direction],
        pin: Option<Direction>,
        out: &mut Vec<Move>,
    ) {
        let ally = self.side_to_move;
        for &direction in directions {
            if pin.is_some_and(|pin| !pin.is_parallel_to(direction)) {
                continue;
            }
            for step in 1..8 {
                let Some(target) = square.offset(direction, step) else {
                    break;
                };
                match self.board.get(target) {
                    None => out.extend(Move::new(square, target, &self.board)),
                    Some(piece) if piece.color != ally => {
                        out.extend(Move::new(square, target, &self.board));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
