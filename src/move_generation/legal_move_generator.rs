//! Full legal move generation pipeline.
//!
//! Orchestrates the pseudo-legal scan, probes each candidate on the live
//! state with a make/undo pair, filters the ones that leave the mover's
//! king attacked, and refreshes the terminal game flags from the outcome.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{
    MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::move_generation::pseudo_legal_generator::generate_pseudo_legal;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    /// Survivors keep their pseudo-legal generation order. On return the
    /// state's board, side, and history are exactly as on entry; only the
    /// `checkmate`/`stalemate` flags are reassigned, and both are written
    /// on every call so no stale flag outlives the position it described.
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>> {
        let mover = game_state.side_to_move;
        let pseudo = generate_pseudo_legal(&game_state.board, mover);

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            game_state.make_move(mv).map_err(|err| {
                MoveGenerationError::InvalidState(format!("probe apply failed: {err}"))
            })?;

            let exposes_king = is_king_in_check(game_state, mover);

            if game_state.undo_move().is_none() {
                return Err(MoveGenerationError::InvalidState(
                    "probe revert found an empty history".to_owned(),
                ));
            }

            if !exposes_king {
                legal.push(mv);
            }
        }

        if legal.is_empty() {
            let checked = is_king_in_check(game_state, mover);
            game_state.checkmate = checked;
            game_state.stalemate = !checked;
        } else {
            game_state.checkmate = false;
            game_state.stalemate = false;
        }

        Ok(legal)
    }
}
