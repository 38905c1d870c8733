//! Pin and check detection by ray casting from the king.
//!
//! From the side-to-move's king square the eight rook/bishop rays are walked
//! outward. The first friendly piece on a ray is a pin candidate; a second
//! friendly piece cancels it. An enemy piece that attacks along the ray gives
//! check when nothing stands in between, or pins the candidate when exactly
//! one friendly piece does. Knight checks are probed separately and never
//! produce pins.
//!
//! The friendly king itself is transparent to the scan. King move generation
//! relies on this: it relocates only `king_squares` and rescans, so the
//! king's real square must not shield the destination from a slider.

use crate::game_state::chess_types::{
    Color, Direction, PieceKind, Square, KING_DIRECTIONS, KNIGHT_OFFSETS,
};
use crate::game_state::game_state::GameState;

/// A friendly piece confined to the ray running through it from the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Direction from the king towards the pinned piece.
    pub direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    /// Direction (or knight offset) from the king towards the checker.
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub checks: Vec<Check>,
    pub pins: Vec<Pin>,
}

impl GameState {
    /// Store a fresh scan as the position's check and pin state.
    pub(crate) fn refresh_check_state(&mut self) {
        let info = self.find_pins_and_checks();
        self.in_check = info.in_check;
        self.checks = info.checks;
        self.pins = info.pins;
    }

    /// Scan from the side-to-move's recorded king square.
    pub fn find_pins_and_checks(&self) -> CheckInfo {
        let ally = self.side_to_move;
        let enemy = ally.opposite();
        let king = self.king_square(ally);
        let mut info = CheckInfo::default();

        for direction in KING_DIRECTIONS {
            let mut possible_pin: Option<Pin> = None;
            for step in 1..8 {
                let Some(square) = king.offset(direction, step) else {
                    break;
                };
                let Some(piece) = self.board.get(square) else {
                    continue;
                };

                if piece.color == ally {
                    if piece.kind == PieceKind::King {
                        continue;
                    }
                    if possible_pin.is_some() {
                        break;
                    }
                    possible_pin = Some(Pin { square, direction });
                    continue;
                }

                if attacks_along_ray(piece.kind, enemy, direction, step) {
                    match possible_pin {
                        None => {
                            info.in_check = true;
                            info.checks.push(Check { square, direction });
                        }
                        Some(pin) => info.pins.push(pin),
                    }
                }
                break;
            }
        }

        for offset in KNIGHT_OFFSETS {
            let Some(square) = king.offset(offset, 1) else {
                continue;
            };
            if self
                .board
                .get(square)
                .is_some_and(|piece| piece.is(enemy, PieceKind::Knight))
            {
                info.in_check = true;
                info.checks.push(Check {
                    square,
                    direction: offset,
                });
            }
        }

        info
    }

    /// Squares a non-king move may land on to answer a single check: the
    /// checker's square, plus every square strictly between it and the king
    /// for sliding checkers.
    pub(crate) fn check_block_squares(&self, check: Check) -> Vec<Square> {
        let checker_is_knight = self
            .board
            .get(check.square)
            .is_some_and(|piece| piece.kind == PieceKind::Knight);
        if checker_is_knight {
            return vec![check.square];
        }

        let king = self.king_square(self.side_to_move);
        let mut squares = Vec::with_capacity(7);
        for step in 1..8 {
            let Some(square) = king.offset(check.direction, step) else {
                break;
            };
            squares.push(square);
            if square == check.square {
                break;
            }
        }
        squares
    }
}

/// Whether an enemy piece of `kind` met `distance` steps from the king along
/// `direction` attacks the king.
fn attacks_along_ray(kind: PieceKind, enemy: Color, direction: Direction, distance: i8) -> bool {
    match kind {
        PieceKind::Rook => direction.is_orthogonal(),
        PieceKind::Bishop => !direction.is_orthogonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // An enemy pawn sits one row "behind" its own push direction from the
        // square it attacks.
        PieceKind::Pawn => {
            distance == 1
                && !direction.is_orthogonal()
                && direction.d_row == -enemy.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, Direction, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_has_no_checks_or_pins() {
        let info = GameState::new_game().find_pins_and_checks();
        assert!(!info.in_check);
        assert!(info.checks.is_empty());
        assert!(info.pins.is_empty());
    }

    #[test]
    fn detects_pin_behind_single_blocker() {
        let game = GameState::from_diagram(
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
        let info = game.find_pins_and_checks();
        assert!(!info.in_check);
        assert_eq!(info.pins.len(), 1);
        assert_eq!(info.pins[0].square, Square::new(6, 4));
        assert_eq!(info.pins[0].direction, Direction::new(-1, 0));
    }

    #[test]
    fn two_blockers_cancel_the_pin() {
        let game = GameState::from_diagram(
            "....r..k
             ........
             ........
             ........
             ....P...
             ........
             ....N...
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        assert!(game.find_pins_and_checks().pins.is_empty());
    }

    #[test]
    fn detects_double_check_from_rook_and_knight() {
        let game = GameState::from_diagram(
            "....r..k
             ........
             ........
             ........
             ........
             ...n....
             ........
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let info = game.find_pins_and_checks();
        assert!(info.in_check);
        assert_eq!(info.checks.len(), 2);
    }

    #[test]
    fn pawns_only_check_along_their_capture_diagonals() {
        // Black pawn on d2 attacks e1; a black pawn diagonally "below" would not.
        let attacked = GameState::from_diagram(
            ".......k
             ........
             ........
             ........
             ........
             ........
             ...p....
             ....K...",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        assert!(attacked.find_pins_and_checks().in_check);

        let not_attacked = GameState::from_diagram(
            ".......k
             ........
             ........
             ........
             ........
             ....K...
             ...p....
             ........",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        assert!(!not_attacked.find_pins_and_checks().in_check);
    }

    #[test]
    fn sliding_check_block_squares_end_at_checker() {
        let game = GameState::from_diagram(
            "b......k
             ........
             ........
             ........
             ........
             ........
             ........
             .......K",
            Color::Light,
            CastlingRights::NONE,
        )
        .expect("position should build");
        let info = game.find_pins_and_checks();
        assert_eq!(info.checks.len(), 1);
        let squares = game.check_block_squares(info.checks[0]);
        assert_eq!(squares.len(), 7);
        assert_eq!(squares.last(), Some(&Square::new(0, 0)));
    }
}
