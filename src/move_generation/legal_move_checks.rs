use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_legal_generator::generate_pseudo_legal;

/// Whether `attacker` has any pseudo-legal move landing on `target`.
///
/// This is a destination-set membership test, not a geometric attack map.
/// For king safety the two agree: a pawn's forward push only targets empty
/// squares, and the square being defended always holds the king.
pub fn square_under_attack(board: &Board, target: Coord, attacker: Color) -> bool {
    generate_pseudo_legal(board, attacker)
        .iter()
        .any(|mv| mv.destination == target)
}

/// Whether `color`'s king is attacked, using the cached king location.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    square_under_attack(
        &game_state.board,
        game_state.king_location(color),
        color.opposite(),
    )
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, square_under_attack};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_coord;

    fn square(name: &str) -> crate::game_state::chess_types::Coord {
        algebraic_to_coord(name).expect("test square should parse")
    }

    #[test]
    fn no_check_in_the_starting_position() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game, Color::Light));
        assert!(!is_king_in_check(&game, Color::Dark));
    }

    #[test]
    fn rook_attacks_along_open_file_and_rank_only() {
        let game = GameState::from_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");

        assert!(square_under_attack(&game.board, square("a1"), Color::Dark));
        assert!(square_under_attack(&game.board, square("a3"), Color::Dark));
        assert!(square_under_attack(&game.board, square("d8"), Color::Dark));
        assert!(!square_under_attack(&game.board, square("b7"), Color::Dark));
        assert!(!square_under_attack(&game.board, square("h1"), Color::Dark));
    }

    #[test]
    fn blockers_shadow_the_far_side_of_a_ray() {
        let game = GameState::from_fen("r3k3/8/8/P3K3/8/8/8/8 w - - 0 1")
            .expect("FEN should parse");

        // The light pawn on a5 is capturable, but it shields a4..a1 from
        // the a8 rook.
        assert!(square_under_attack(&game.board, square("a6"), Color::Dark));
        assert!(square_under_attack(&game.board, square("a5"), Color::Dark));
        assert!(!square_under_attack(&game.board, square("a4"), Color::Dark));
        assert!(!square_under_attack(&game.board, square("a1"), Color::Dark));
    }

    #[test]
    fn pawn_threatens_its_capture_diagonals_when_occupied() {
        // Dark pawn on d4; light knights stand on the squares in question.
        let game = GameState::from_fen("4k3/8/8/8/3p4/1NN1N3/8/4K3 w - - 0 1")
            .expect("FEN should parse");

        assert!(square_under_attack(&game.board, square("c3"), Color::Dark));
        assert!(square_under_attack(&game.board, square("e3"), Color::Dark));
        assert!(!square_under_attack(&game.board, square("b3"), Color::Dark));
    }

    #[test]
    fn check_is_seen_from_the_checked_side_only() {
        // Fool's mate final position: the light king is mated by the queen
        // on h4.
        let game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("FEN should parse");

        assert!(is_king_in_check(&game, Color::Light));
        assert!(!is_king_in_check(&game, Color::Dark));
        assert!(game.in_check());
    }

    #[test]
    fn adjacent_enemy_king_counts_as_an_attacker() {
        let game = GameState::from_fen("8/8/8/8/8/2k5/8/K7 w - - 0 1")
            .expect("FEN should parse");
        assert!(square_under_attack(&game.board, square("b2"), Color::Dark));
        assert!(!square_under_attack(&game.board, square("a1"), Color::Dark));
    }
}
