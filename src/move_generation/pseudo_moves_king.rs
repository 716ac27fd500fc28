//! King move generation.
//!
//! One-square steps in the eight directions. Nothing here asks whether the
//! destination is safe; stepping into an attacked square is weeded out by
//! the legal filter like any other self-check.

use crate::game_state::chess_types::*;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, origin: Coord, color: Color, out: &mut Vec<Move>) {
    let king = Piece::new(color, PieceKind::King);

    for (row_delta, col_delta) in KING_OFFSETS {
        let Some(target) = origin.offset(row_delta, col_delta) else {
            continue;
        };
        match piece_on_square(board, target) {
            Some(occupant) if occupant.color == color => {}
            occupant => out.push(Move::new(origin, target, king, occupant)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::{algebraic_to_coord, coord_to_algebraic};

    fn king_targets(board: &Board, origin: &str) -> Vec<String> {
        let origin = algebraic_to_coord(origin).expect("test square should parse");
        let mut moves = Vec::new();
        generate_king_moves(board, origin, Color::Light, &mut moves);
        let mut targets: Vec<String> = moves
            .iter()
            .map(|mv| coord_to_algebraic(mv.destination))
            .collect();
        targets.sort();
        targets
    }

    #[test]
    fn centered_king_steps_to_all_eight_neighbors() {
        let board: Board = [[None; 8]; 8];
        assert_eq!(
            king_targets(&board, "d4"),
            ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"]
        );
    }

    #[test]
    fn corner_king_has_three_neighbors() {
        let board: Board = [[None; 8]; 8];
        assert_eq!(king_targets(&board, "a1"), ["a2", "b1", "b2"]);
    }

    #[test]
    fn neighbors_holding_friends_are_excluded_enemies_captured() {
        let mut board: Board = [[None; 8]; 8];
        set_square(
            &mut board,
            algebraic_to_coord("d5").expect("d5 should parse"),
            Some(Piece::new(Color::Light, PieceKind::Pawn)),
        );
        set_square(
            &mut board,
            algebraic_to_coord("e4").expect("e4 should parse"),
            Some(Piece::new(Color::Dark, PieceKind::Bishop)),
        );

        let targets = king_targets(&board, "d4");
        assert!(!targets.contains(&"d5".to_owned()));
        assert!(targets.contains(&"e4".to_owned()));
        assert_eq!(targets.len(), 7);
    }
}
