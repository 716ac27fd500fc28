//! Move record and the structural errors raised when applying one.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{piece_on_square, Board, Color, Coord, Piece, PieceKind};
use crate::utils::algebraic::coord_to_algebraic;

/// Record of one ply: where a piece came from, where it went, and what it
/// displaced. Carrying the captured piece makes the record self-inverting,
/// so popping it off the history is enough to undo it.
///
/// Equality compares only the origin and destination squares. A square pair
/// proposed from outside (a CLI line, a game-log token) can then be matched
/// against a generated legal move without knowing the piece context.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub origin: Coord,
    pub destination: Coord,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_promotion: bool,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.destination == other.destination
    }
}

impl Eq for Move {}

impl Move {
    /// The promotion flag is derived here, not passed in: a pawn landing on
    /// its color's far row always promotes, and always to a queen.
    pub fn new(
        origin: Coord,
        destination: Coord,
        moved_piece: Piece,
        captured_piece: Option<Piece>,
    ) -> Self {
        let is_promotion = moved_piece.kind == PieceKind::Pawn
            && destination.row() == moved_piece.color.promotion_row();
        Self {
            origin,
            destination,
            moved_piece,
            captured_piece,
            is_promotion,
        }
    }

    /// Build a move from a proposed square pair, reading the piece context
    /// off the board. The origin must hold a piece; legality is not checked
    /// here, that is the move generator's job.
    pub fn from_board(origin: Coord, destination: Coord, board: &Board) -> Result<Self, MoveError> {
        let moved_piece =
            piece_on_square(board, origin).ok_or(MoveError::VacantOrigin(origin))?;
        Ok(Self::new(
            origin,
            destination,
            moved_piece,
            piece_on_square(board, destination),
        ))
    }

    /// Four-character rendering, origin square then destination square.
    /// Promotions carry no suffix because the promoted piece is implied.
    pub fn notation(&self) -> String {
        format!(
            "{}{}",
            coord_to_algebraic(self.origin),
            coord_to_algebraic(self.destination)
        )
    }
}

/// Contract violations detected before a move mutates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square holds no piece.
    VacantOrigin(Coord),
    /// The origin square holds a different piece than the move records.
    PieceMismatch {
        origin: Coord,
        expected: Piece,
        found: Piece,
    },
    /// The moved piece belongs to the side not on turn.
    OutOfTurn { origin: Coord, side_to_move: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::VacantOrigin(origin) => {
                write!(f, "no piece on origin square {}", coord_to_algebraic(*origin))
            }
            MoveError::PieceMismatch {
                origin,
                expected,
                found,
            } => write!(
                f,
                "expected {} on {}, found {}",
                describe_piece(*expected),
                coord_to_algebraic(*origin),
                describe_piece(*found)
            ),
            MoveError::OutOfTurn {
                origin,
                side_to_move,
            } => write!(
                f,
                "piece on {} cannot move while {} is on turn",
                coord_to_algebraic(*origin),
                side_to_move.name()
            ),
        }
    }
}

impl Error for MoveError {}

fn describe_piece(piece: Piece) -> String {
    format!("{} {:?}", piece.color.name(), piece.kind)
}
