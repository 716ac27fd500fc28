//! Uniform random legal-move picker.
//!
//! Selects uniformly from the legal moves and is primarily used for
//! diagnostics, playout testing, and demonstration games in the CLI.

use rand::prelude::IndexedRandom;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

pub struct RandomPlayer {
    move_generator: LegalMoveGenerator,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }

    /// Pick one legal move at random, or `None` when the side to move has
    /// no legal reply (so the position is already terminal).
    pub fn pick_move(&self, game_state: &mut GameState) -> MoveGenResult<Option<Move>> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;

        let mut rng = rand::rng();
        Ok(legal_moves.as_slice().choose(&mut rng).copied())
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPlayer;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;

    #[test]
    fn picked_move_is_a_member_of_the_legal_set() {
        let player = RandomPlayer::new();
        let mut game = GameState::new_game();

        let picked = player
            .pick_move(&mut game)
            .expect("picking should succeed")
            .expect("the starting position has moves");
        let legal = game.valid_moves().expect("generation should succeed");
        assert!(legal.contains(&picked));
    }

    #[test]
    fn terminal_positions_yield_no_pick() {
        let player = RandomPlayer::new();

        let mut mated = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("FEN should parse");
        assert_eq!(player.pick_move(&mut mated).expect("picking should succeed"), None);
        assert!(mated.checkmate);

        let mut stuck =
            GameState::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").expect("FEN should parse");
        assert_eq!(player.pick_move(&mut stuck).expect("picking should succeed"), None);
        assert!(stuck.stalemate);
    }

    #[test]
    fn random_playout_unwinds_back_to_the_start() {
        let player = RandomPlayer::new();
        let mut game = GameState::new_game();

        let mut snapshots = vec![game.get_fen()];
        for _ in 0..40 {
            let Some(mv) = player.pick_move(&mut game).expect("picking should succeed") else {
                break;
            };
            game.make_move(mv).expect("picked move should apply");
            snapshots.push(game.get_fen());
        }
        assert!(snapshots.len() > 1);
        assert_eq!(game.move_history.len(), snapshots.len() - 1);

        for ply in (0..snapshots.len() - 1).rev() {
            assert!(game.undo_move().is_some());
            assert_eq!(game.get_fen(), snapshots[ply]);
        }
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert!(game.move_history.is_empty());
    }
}
