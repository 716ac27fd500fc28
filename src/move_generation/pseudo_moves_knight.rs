use crate::game_state::chess_types::*;

/// The eight L-shaped jumps as row/col deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight moves from one origin square. Jumps ignore intervening pieces;
/// the only exclusions are off-board targets and friendly occupants.
pub fn generate_knight_moves(board: &Board, origin: Coord, color: Color, out: &mut Vec<Move>) {
    let knight = Piece::new(color, PieceKind::Knight);

    for (row_delta, col_delta) in KNIGHT_OFFSETS {
        let Some(target) = origin.offset(row_delta, col_delta) else {
            continue;
        };
        match piece_on_square(board, target) {
            Some(occupant) if occupant.color == color => {}
            occupant => out.push(Move::new(origin, target, knight, occupant)),
        }
    }
}
