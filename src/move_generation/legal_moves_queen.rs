use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Square, KING_DIRECTIONS};
use crate::game_state::game_state::GameState;

impl GameState {
    /// Union of bishop and rook movement. The pin entry is consumed once and
    /// applies to both ray families.
    pub(crate) fn queen_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        let pin = self.take_pin(square);
        self.slide_moves(square, &KING_DIRECTIONS, pin, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn central_queen_on_empty_board_reaches_27_squares() {
        let mut game = GameState::from_diagram(
            "k.......
             ........
             ........
             ........
             ...Q....
             ........
             ........
             .......K",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let queen_moves = game
            .get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == Square::new(4, 3))
            .count();
        assert_eq!(queen_moves, 27);
    }

    #[test]
    fn diagonally_pinned_queen_cannot_slide_orthogonally() {
        let mut game = GameState::from_diagram(
            ".......k
             ........
             ........
             b.......
             ........
             ........
             ...Q....
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let queen_moves: Vec<_> = game
            .get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == Square::new(6, 3))
            .collect();
        assert_eq!(queen_moves.len(), 3);
        assert!(queen_moves
            .iter()
            .all(|mv| mv.end().row as i8 - 6 == mv.end().col as i8 - 3));
    }
}
