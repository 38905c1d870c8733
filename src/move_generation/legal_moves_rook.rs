//! Rook move generation.
//!
//! Rooks slide along ranks and files, capturing the first enemy piece met.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Square, ORTHOGONAL_DIRECTIONS};
use crate::game_state::game_state::GameState;

impl GameState {
    pub(crate) fn rook_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        let pin = self.take_pin(square);
        self.slide_moves(square, &ORTHOGONAL_DIRECTIONS, pin, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_stops_before_friends_and_on_enemies() {
        let mut game = GameState::from_diagram(
            "k.......
             ........
             ........
             r.......
             ........
             ........
             ........
             R..P...K",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let rook_moves: Vec<_> = game
            .get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == Square::new(7, 0))
            .collect();
        // b1, c1 sideways; a2, a3, a4 and the capture on a5.
        assert_eq!(rook_moves.len(), 6);
        assert_eq!(rook_moves.iter().filter(|mv| mv.is_capture()).count(), 1);
    }

    #[test]
    fn pinned_rook_moves_along_the_pin_ray_both_ways() {
        let mut game = GameState::from_diagram(
            "....q..k
             ........
             ........
             ........
             ....R...
             ........
             ........
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let mut targets: Vec<Square> = game
            .get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == Square::new(4, 4))
            .map(|mv| mv.end())
            .collect();
        targets.sort();
        // e2, e3 towards the king; e5, e6, e7 and the capture on e8.
        assert_eq!(targets.len(), 6);
        assert!(targets.iter().all(|square| square.col == 4));
    }
}
