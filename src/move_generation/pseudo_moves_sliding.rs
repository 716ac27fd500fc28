//! Shared ray walker for the sliding pieces.

use crate::game_state::chess_types::*;

/// Walk each direction from the origin, pushing quiet moves until the ray
/// hits a piece. An enemy blocker yields one capture and ends the ray; a
/// friendly blocker just ends it.
pub fn generate_sliding_moves(
    board: &Board,
    origin: Coord,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(row_delta, col_delta) in directions {
        let mut current = origin;
        while let Some(target) = current.offset(row_delta, col_delta) {
            match piece_on_square(board, target) {
                None => {
                    out.push(Move::new(origin, target, piece, None));
                    current = target;
                }
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(Move::new(origin, target, piece, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}
