//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the grid's
//! row/col indexing, reused by the FEN, game-log, and CLI components.

use crate::game_state::chess_types::Coord;

/// Parse one algebraic square (for example: "e4") into a board coordinate.
#[inline]
pub fn algebraic_to_coord(square: &str) -> Result<Coord, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    // Rank 8 sits on row 0, so the rank axis flips while the file axis
    // maps straight through.
    let col = file - b'a';
    let row = b'8' - rank;
    Ok(Coord::new(row, col))
}

/// Render a board coordinate as one algebraic square (for example: "e4").
#[inline]
pub fn coord_to_algebraic(coord: Coord) -> String {
    let file_char = char::from(b'a' + coord.col());
    let rank_char = char::from(b'8' - coord.row());
    format!("{file_char}{rank_char}")
}
