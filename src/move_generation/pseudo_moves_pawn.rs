use crate::game_state::chess_types::*;

/// Pawn moves from one origin square: single push, double push from the
/// home row, and the two diagonal captures. The origin is trusted to hold
/// a pawn of the given color.
///
/// Pushes require empty squares and never capture; diagonals only fire
/// when an enemy piece stands on them. Promotion needs no handling here,
/// the [`Move`] constructor flags any pawn arrival on the far row.
pub fn generate_pawn_moves(board: &Board, origin: Coord, color: Color, out: &mut Vec<Move>) {
    let pawn = Piece::new(color, PieceKind::Pawn);
    let step = color.pawn_row_step();

    if let Some(one_ahead) = origin.offset(step, 0) {
        if piece_on_square(board, one_ahead).is_none() {
            out.push(Move::new(origin, one_ahead, pawn, None));

            if origin.row() == color.pawn_home_row() {
                if let Some(two_ahead) = one_ahead.offset(step, 0) {
                    if piece_on_square(board, two_ahead).is_none() {
                        out.push(Move::new(origin, two_ahead, pawn, None));
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1] {
        let Some(target) = origin.offset(step, col_delta) else {
            continue;
        };
        match piece_on_square(board, target) {
            Some(occupant) if occupant.color != color => {
                out.push(Move::new(origin, target, pawn, Some(occupant)));
            }
            _ => {}
        }
    }
}
