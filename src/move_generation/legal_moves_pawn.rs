//! Pawn move generation: pushes, double pushes, captures and en passant.
//!
//! Promotion always queens; the promotion flag is derived when the `Move` is
//! built for a pawn landing on its promotion row.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Direction, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

impl GameState {
    pub(crate) fn pawn_moves(&mut self, square: Square, out: &mut Vec<Move>) {
        let pin = self.take_pin(square);
        let allowed = |direction: Direction| pin.map_or(true, |pin| pin.is_parallel_to(direction));

        let ally = self.side_to_move;
        let pawn = Piece::new(ally, PieceKind::Pawn);
        let forward = Direction::new(ally.pawn_direction(), 0);

        if allowed(forward) {
            if let Some(one_step) = square.offset(forward, 1) {
                if self.board.is_empty(one_step) {
                    out.extend(Move::new(square, one_step, &self.board));
                    if square.row == ally.pawn_start_row() {
                        if let Some(two_step) = square.offset(forward, 2) {
                            if self.board.is_empty(two_step) {
                                out.extend(Move::new(square, two_step, &self.board));
                            }
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let diagonal = Direction::new(ally.pawn_direction(), d_col);
            if !allowed(diagonal) {
                continue;
            }
            let Some(target) = square.offset(diagonal, 1) else {
                continue;
            };
            match self.board.get(target) {
                Some(piece) if piece.color != ally => {
                    out.extend(Move::new(square, target, &self.board));
                }
                None if self.en_passant_square == Some(target) => {
                    let capture = Move::en_passant(square, target, pawn);
                    if self.en_passant_is_safe(&capture) {
                        out.push(capture);
                    }
                }
                _ => {}
            }
        }
    }

    /// En passant removes two pawns from one rank at once, which can expose
    /// the king to a rook or queen on that rank even though neither pawn is
    /// pinned on its own. The captured pawn may also be the last piece
    /// shielding the king on a diagonal.
    fn en_passant_is_safe(&self, capture: &Move) -> bool {
        let enemy = self.side_to_move.opposite();
        let captured_square = capture.en_passant_capture_square();
        let holds_enemy_pawn = self
            .board
            .get(captured_square)
            .is_some_and(|piece| piece.is(enemy, PieceKind::Pawn));
        if !holds_enemy_pawn {
            return false;
        }

        let king = self.king_square(self.side_to_move);
        self.rank_stays_closed(king, capture) && self.diagonal_stays_closed(king, captured_square)
    }

    /// Scan between the king and the pawn pair for a blocker, then beyond the
    /// pair for an enemy rook or queen.
    fn rank_stays_closed(&self, king: Square, capture: &Move) -> bool {
        let enemy = self.side_to_move.opposite();
        let captured_square = capture.en_passant_capture_square();
        let row = capture.start().row;
        if king.row != row {
            return true;
        }

        let low = capture.start().col.min(captured_square.col);
        let high = capture.start().col.max(captured_square.col);
        let (inside, outside): (Vec<u8>, Vec<u8>) = if king.col < low {
            ((king.col + 1..low).collect(), (high + 1..8).collect())
        } else {
            ((high + 1..king.col).collect(), (0..low).rev().collect())
        };

        let blocked = inside
            .iter()
            .any(|&col| !self.board.is_empty(Square::new(row, col)));
        if blocked {
            return true;
        }

        for col in outside {
            if let Some(piece) = self.board.get(Square::new(row, col)) {
                let attacks = piece.color == enemy
                    && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
                return !attacks;
            }
        }
        true
    }

    /// Neither the capturing pawn's start nor its landing square lies on a
    /// diagonal through the captured pawn, so only the captured square
    /// changes along that ray.
    fn diagonal_stays_closed(&self, king: Square, captured_square: Square) -> bool {
        let d_row = captured_square.row as i8 - king.row as i8;
        let d_col = captured_square.col as i8 - king.col as i8;
        if d_row.abs() != d_col.abs() {
            return true;
        }

        let enemy = self.side_to_move.opposite();
        let direction = Direction::new(d_row.signum(), d_col.signum());
        for step in 1..8 {
            let Some(square) = king.offset(direction, step) else {
                return true;
            };
            if square == captured_square {
                continue;
            }
            if let Some(piece) = self.board.get(square) {
                let beyond_capture = step > d_row.abs();
                return !(beyond_capture
                    && piece.color == enemy
                    && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square_pair;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let (start, end) = algebraic_to_square_pair(text).expect("square pair should parse");
            let mv = game
                .legal_move_for(start, end)
                .unwrap_or_else(|| panic!("{text} should be legal"));
            game.make_move(mv).expect("legal move should apply");
        }
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let mut game = GameState::new_game();
        let e_pawn: Vec<_> = game
            .get_valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == Square::new(6, 4))
            .collect();
        assert_eq!(e_pawn.len(), 2);
    }

    #[test]
    fn double_push_beside_enemy_pawn_offers_one_en_passant() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);

        let moves = game.get_valid_moves();
        let en_passant: Vec<_> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        let capture = *en_passant[0];
        assert_eq!(capture.chess_notation(), "e5d6");

        game.make_move(capture).expect("en passant should apply");
        // The passed pawn disappears from d5, not from the d6 landing square.
        assert_eq!(game.piece_at(Square::new(3, 3)), None);
        assert!(game.piece_at(Square::new(2, 3)).is_some());
        assert_eq!(game.piece_at(Square::new(3, 4)), None);
    }

    #[test]
    fn en_passant_expiring_after_one_ply() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
        let moves = game.get_valid_moves();
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn en_passant_refused_when_it_exposes_king_on_rank() {
        // White king a5, pawns b5/c5 side by side, black rook h5.
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             KPp....r
             ........
             ........
             ........
             ........",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let mut game = game.with_en_passant_target(Square::new(2, 2));
        let moves = game.get_valid_moves();
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn en_passant_allowed_when_rank_is_blocked() {
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             KPp..n.r
             ........
             ........
             ........
             ........",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let mut game = game.with_en_passant_target(Square::new(2, 2));
        let moves = game.get_valid_moves();
        assert_eq!(moves.iter().filter(|mv| mv.is_en_passant()).count(), 1);
    }

    #[test]
    fn en_passant_refused_when_it_opens_a_diagonal() {
        // Black just played d7d5; the d5 pawn shields the f3 king from the b7
        // bishop.
        let game = GameState::from_diagram(
            "....k...
             .b......
             ........
             ...pP...
             ........
             .....K..
             ........
             ........",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let mut game = game.with_en_passant_target(Square::new(2, 3));
        let moves = game.get_valid_moves();
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn en_passant_can_remove_a_checking_pawn() {
        // Black just played d7d5 giving check to the e4 king.
        let game = GameState::from_diagram(
            "....k...
             ........
             ........
             ..Pp....
             ....K...
             ........
             ........
             ........",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let mut game = game.with_en_passant_target(Square::new(2, 3));
        let moves = game.get_valid_moves();
        assert!(game.is_check());
        assert!(moves.iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn reaching_the_last_rank_promotes_to_queen() {
        let mut game = GameState::from_diagram(
            "....k...
             P.......
             ........
             ........
             ........
             ........
             ........
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let (start, end) = algebraic_to_square_pair("a7a8").expect("square pair should parse");
        let promotion = game.legal_move_for(start, end).expect("push should be legal");
        assert!(promotion.is_promotion());
        game.make_move(promotion).expect("promotion should apply");
        let queen = game.piece_at(end).expect("promoted piece on a8");
        assert_eq!(queen.to_char(), 'Q');
        assert!(game.last_move().is_some_and(|mv| mv.is_check()));

        game.undo_move().expect("undo should succeed");
        assert_eq!(game.piece_at(start).map(|piece| piece.to_char()), Some('P'));
        assert_eq!(game.piece_at(end), None);
    }
}
