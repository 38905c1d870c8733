use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Square, KNIGHT_OFFSETS};
use crate::game_state::game_state::GameState;

impl GameState {
    /// Knight jumps from `square`. A pinned knight can never stay on its pin
    /// ray, so it has no moves at all.
    pub(crate) fn knight_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        if self.take_pin(square).is_some() {
            return;
        }

        let ally = self.side_to_move;
        for offset in KNIGHT_OFFSETS {
            let Some(target) = square.offset(offset, 1) else {
                continue;
            };
            if self.board.get(target).is_some_and(|piece| piece.color == ally) {
                continue;
            }
            out.extend(Move::new(square, target, &self.board));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn pinned_knight_cannot_move() {
        let mut game = GameState::from_diagram(
            "....r..k
             ........
             ........
             ........
             ........
             ........
             ....N...
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let moves = game.get_valid_moves();
        assert!(moves
            .iter()
            .all(|mv| mv.piece_moved().kind != PieceKind::Knight));
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let mut game = GameState::from_diagram(
            "k.......
             ........
             ........
             ........
             ........
             ........
             ........
             N......K",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let knight_moves: Vec<_> = game
            .get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == Square::new(7, 0))
            .collect();
        assert_eq!(knight_moves.len(), 2);
    }
}
