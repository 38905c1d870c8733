//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox for debugging, tests,
//! and the self-play driver.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::row_to_rank;

/// Render the board to a Unicode string for terminal output, White at the
/// bottom.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        out.push(row_to_rank(row));
        out.push(' ');

        for col in 0..8u8 {
            match game_state.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(row_to_rank(row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Numbered move list, two plies per line: `1. e4 e5`.
pub fn render_move_log(moves: &[Move]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| {
            let plies: Vec<String> = pair.iter().map(Move::to_string).collect();
            format!("{}. {}", index + 1, plies.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_renders_with_white_at_the_bottom() {
        let game = GameState::new_game();
        let text = render_game_state(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn move_log_pairs_plies() {
        let mut game = GameState::new_game();
        for (start, end) in [
            (Square::new(6, 4), Square::new(4, 4)),
            (Square::new(1, 4), Square::new(3, 4)),
            (Square::new(7, 6), Square::new(5, 5)),
        ] {
            let mv = game
                .legal_move_for(start, end)
                .expect("opening move should be legal");
            game.make_move(mv).expect("move should apply");
        }
        assert_eq!(render_move_log(game.move_log()), "1. e4 e5\n2. Nf3");
    }
}
