use crate::game_state::chess_types::{Coord, Move};
use crate::utils::algebraic::algebraic_to_coord;

/// Parse a four-character move token ("e2e4") into its square pair.
///
/// There is no five-character promotion form: a pawn reaching the far row
/// always becomes a queen, so the suffix would carry no information.
pub fn long_algebraic_to_coords(text: &str) -> Result<(Coord, Coord), String> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("Invalid long algebraic move: {text}"));
    }

    let origin = algebraic_to_coord(&text[0..2])?;
    let destination = algebraic_to_coord(&text[2..4])?;
    Ok((origin, destination))
}

/// Find the legal move matching a proposed square pair, if any. This is
/// where outside input meets the generator: the pair alone decides the
/// match, and the returned move carries the full piece context.
pub fn find_legal_move(legal_moves: &[Move], origin: Coord, destination: Coord) -> Option<Move> {
    legal_moves
        .iter()
        .copied()
        .find(|mv| mv.origin == origin && mv.destination == destination)
}
