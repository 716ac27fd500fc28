//! Bishop move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(board: &Board, origin: Coord, color: Color, out: &mut Vec<Move>) {
    generate_sliding_moves(
        board,
        origin,
        Piece::new(color, PieceKind::Bishop),
        &BISHOP_DIRECTIONS,
        out,
    );
}
