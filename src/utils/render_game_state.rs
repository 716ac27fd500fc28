//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the game grid for the CLI,
//! tests, and diagnostics in text environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output, rank 8 at
/// the top with file and rank rulers on all four edges.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8u8 {
            match piece_on_square(&game_state.board, Coord::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
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
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_renders_with_rank_eight_on_top() {
        let game = GameState::new_game();
        let rendered = render_game_state(&game);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[3], "6 · · · · · · · · 6");
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn sparse_position_marks_empty_squares() {
        let game =
            GameState::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let rendered = render_game_state(&game);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "8 · · · · ♚ · · · 8");
        assert_eq!(lines[4], "5 · · · ♛ · · · · 5");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
    }
}
