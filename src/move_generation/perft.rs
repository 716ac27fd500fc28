use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{
    MoveGenResult, MoveGenerationError, MoveGenerator,
};

/// Tallies collected over the leaves of a perft walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

/// Walk the legal move tree to `depth` plies and tally the leaves.
///
/// The walk mutates the state with make/undo pairs and restores it fully
/// before returning. It is deliberately single threaded: one `GameState`
/// is one game, and the probing pipeline owns it for the duration.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    let mut counts = PerftCounts::default();

    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    perft_recurse(generator, game_state, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;

    if depth == 1 {
        for mv in &moves {
            counts.nodes += 1;
            if mv.captured_piece.is_some() {
                counts.captures += 1;
            }
            if mv.is_promotion {
                counts.promotions += 1;
            }
        }
        return Ok(());
    }

    for mv in moves {
        game_state.make_move(mv).map_err(|err| {
            MoveGenerationError::InvalidState(format!("perft apply failed: {err}"))
        })?;

        perft_recurse(generator, game_state, depth - 1, counts)?;

        if game_state.undo_move().is_none() {
            return Err(MoveGenerationError::InvalidState(
                "perft revert found an empty history".to_owned(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, PerftCounts};
    use crate::game_state::chess_types::{Color, Move, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
    use crate::utils::algebraic::algebraic_to_coord;

    /// Scripted generator driven by the ply count, so the walker can be
    /// tested through the trait seam without real move generation.
    struct MockMoveGenerator;

    impl MoveGenerator for MockMoveGenerator {
        fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>> {
            let square = |name: &str| algebraic_to_coord(name).expect("mock square should parse");
            let light_king = Piece::new(Color::Light, PieceKind::King);
            let dark_king = Piece::new(Color::Dark, PieceKind::King);

            Ok(match game_state.move_history.len() {
                0 => vec![
                    Move::new(square("a1"), square("b1"), light_king, None),
                    Move::new(square("a1"), square("a2"), light_king, None),
                ],
                1 => vec![Move::new(square("a8"), square("b8"), dark_king, None)],
                _ => Vec::new(),
            })
        }
    }

    fn mock_game() -> GameState {
        GameState::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse")
    }

    #[test]
    fn depth_zero_counts_the_root_as_one_node() {
        let mut game = mock_game();
        let counts = perft(&MockMoveGenerator, &mut game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn walker_aggregates_across_the_scripted_tree() {
        let mut game = mock_game();
        let before_fen = game.get_fen();

        // Two root moves, each with a single reply.
        assert_eq!(
            perft(&MockMoveGenerator, &mut game, 1)
                .expect("perft should run")
                .nodes,
            2
        );
        assert_eq!(
            perft(&MockMoveGenerator, &mut game, 2)
                .expect("perft should run")
                .nodes,
            2
        );
        // The scripted tree is exhausted below depth two.
        assert_eq!(
            perft(&MockMoveGenerator, &mut game, 3)
                .expect("perft should run")
                .nodes,
            0
        );

        assert_eq!(game.get_fen(), before_fen);
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn starting_position_node_counts() {
        let mut game = GameState::new_game();
        let before_fen = game.get_fen();

        let depth_one = perft(&LegalMoveGenerator, &mut game, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 20);
        assert_eq!(depth_one.captures, 0);
        assert_eq!(depth_one.promotions, 0);

        assert_eq!(
            perft(&LegalMoveGenerator, &mut game, 2)
                .expect("perft should run")
                .nodes,
            400
        );
        let depth_three = perft(&LegalMoveGenerator, &mut game, 3).expect("perft should run");
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);

        let depth_four = perft(&LegalMoveGenerator, &mut game, 4).expect("perft should run");
        assert_eq!(depth_four.nodes, 197_281);
        assert_eq!(depth_four.captures, 1_576);
        assert_eq!(depth_four.promotions, 0);

        assert_eq!(game.get_fen(), before_fen);
    }

    #[test]
    fn bare_kings_node_counts() {
        let mut game =
            GameState::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");

        for (depth, expected) in [(1u8, 3usize), (2, 9), (3, 54)] {
            let counts = perft(&LegalMoveGenerator, &mut game, depth).expect("perft should run");
            assert_eq!(counts.nodes, expected, "depth {depth}");
            assert_eq!(counts.captures, 0, "depth {depth}");
        }
    }

    #[test]
    fn rook_and_king_node_counts() {
        let mut game =
            GameState::from_fen("7k/8/8/8/8/8/8/RK6 w - - 0 1").expect("FEN should parse");

        assert_eq!(
            perft(&LegalMoveGenerator, &mut game, 1)
                .expect("perft should run")
                .nodes,
            11
        );
        assert_eq!(
            perft(&LegalMoveGenerator, &mut game, 2)
                .expect("perft should run")
                .nodes,
            30
        );
    }

    #[test]
    fn promotion_race_counts_captures_and_promotions() {
        let mut game =
            GameState::from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");

        let depth_one = perft(&LegalMoveGenerator, &mut game, 1).expect("perft should run");
        assert_eq!(
            depth_one,
            PerftCounts {
                nodes: 3,
                captures: 1,
                promotions: 2,
            }
        );

        let depth_two = perft(&LegalMoveGenerator, &mut game, 2).expect("perft should run");
        assert_eq!(
            depth_two,
            PerftCounts {
                nodes: 27,
                captures: 1,
                promotions: 0,
            }
        );
    }
}
