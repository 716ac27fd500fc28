//! FEN-to-GameState parser.
//!
//! Builds a playable game state from a Forsyth-Edwards Notation string:
//! board grid, side to move, and the derived king locations. The castling,
//! en-passant, and clock fields are validated for shape and then dropped
//! because this engine tracks none of them.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_coord;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut board: Board = [[None; 8]; 8];
    parse_board(board_part, &mut board)?;
    let side_to_move = parse_side_to_move(side_part)?;
    validate_castling_field(castling_part)?;
    validate_en_passant_field(en_passant_part)?;
    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    let king_locations = locate_kings(&board)?;

    Ok(GameState {
        board,
        side_to_move,
        move_history: Vec::new(),
        king_locations,
        checkmate: false,
        stalemate: false,
    })
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first, which is exactly row 0 of the grid, so the
    // rank lines map straight onto rows without reversal.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            set_square(board, Coord::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn validate_castling_field(castling_part: &str) -> Result<(), String> {
    if castling_part == "-" {
        return Ok(());
    }
    if castling_part.is_empty() {
        return Err("Empty castling rights field".to_owned());
    }

    for ch in castling_part.chars() {
        if !matches!(ch, 'K' | 'Q' | 'k' | 'q') {
            return Err(format!("Invalid castling rights character: {ch}"));
        }
    }

    Ok(())
}

fn validate_en_passant_field(en_passant_part: &str) -> Result<(), String> {
    if en_passant_part == "-" {
        return Ok(());
    }

    algebraic_to_coord(en_passant_part)?;
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

/// Each side must field exactly one king; the returned pair is indexed by
/// [`Color::index`] and seeds the king-location cache.
fn locate_kings(board: &Board) -> Result<[Coord; 2], String> {
    let mut kings: [Option<Coord>; 2] = [None, None];

    for row in 0..8u8 {
        for col in 0..8u8 {
            let coord = Coord::new(row, col);
            let Some(piece) = piece_on_square(board, coord) else {
                continue;
            };
            if piece.kind != PieceKind::King {
                continue;
            }
            let slot = &mut kings[piece.color.index()];
            if slot.is_some() {
                return Err(format!(
                    "{} side has more than one king",
                    piece.color.name()
                ));
            }
            *slot = Some(coord);
        }
    }

    match kings {
        [Some(light), Some(dark)] => Ok([light, dark]),
        [None, _] => Err("Light side has no king".to_owned()),
        [_, None] => Err("Dark side has no king".to_owned()),
    }
}
