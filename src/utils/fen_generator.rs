use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the game state as a FEN string.
///
/// The castling and en-passant fields are always `-` and the halfmove clock
/// is always `0` because none of them are tracked; the fullmove number is
/// synthesized from the length of the move history.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let fullmove_number = game_state.move_history.len() / 2 + 1;

    format!("{board} {side_to_move} - - 0 {fullmove_number}")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    // Row 0 already holds rank 8, so rows emit top to bottom in FEN order.
    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match piece_on_square(board, Coord::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}
