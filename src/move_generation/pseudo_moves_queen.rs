use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;

/// Rook directions first, then bishop directions.
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub fn generate_queen_moves(board: &Board, origin: Coord, color: Color, out: &mut Vec<Move>) {
    generate_sliding_moves(
        board,
        origin,
        Piece::new(color, PieceKind::Queen),
        &QUEEN_DIRECTIONS,
        out,
    );
}
