//! Pseudo-legal move enumeration.
//!
//! Scans the board for one side's pieces and collects every move that is
//! geometrically well formed, ignoring whether the mover's king ends up
//! attacked. The scan is a pure function of board and side, so the attack
//! test can ask "what could the opponent play here?" without touching the
//! turn state.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

/// Every pseudo-legal move for `side`, scanning origins row by row from
/// row 0 and column by column within each row. The per-piece generators
/// append in fixed direction order, so the output order is deterministic
/// for a given position.
pub fn generate_pseudo_legal(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let origin = Coord::new(row, col);
            let Some(piece) = piece_on_square(board, origin) else {
                continue;
            };
            if piece.color != side {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(board, origin, side, &mut out),
                PieceKind::Knight => generate_knight_moves(board, origin, side, &mut out),
                PieceKind::Bishop => generate_bishop_moves(board, origin, side, &mut out),
                PieceKind::Rook => generate_rook_moves(board, origin, side, &mut out),
                PieceKind::Queen => generate_queen_moves(board, origin, side, &mut out),
                PieceKind::King => generate_king_moves(board, origin, side, &mut out),
            }
        }
    }

    out
}
