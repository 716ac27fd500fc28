//! Core types for the grid-based game model.
//!
//! The board is an 8x8 array of optional pieces indexed `[row][col]`.
//! Row 0 is the rank farthest from the light side (rank 8 in algebraic
//! terms, the dark side's home rank) and row 7 is rank 1; column 0 is
//! file a. Rank and row are related by `rank = 8 - row`.

pub use crate::game_state::chess_move::{Move, MoveError};
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "Light",
            Color::Dark => "Dark",
        }
    }

    /// Row delta one pawn step of this color advances by. Light pawns
    /// march toward row 0, dark pawns toward row 7.
    #[inline]
    pub const fn pawn_row_step(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row this color's pawns start on.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Far row where this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// One occupant of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. The fields are private so every constructed value is
/// a real square; code that steps off the board goes through [`Coord::offset`]
/// and gets `None` instead of a corrupt coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Panics when either index is out of range. Callers with untrusted
    /// input validate first (see the algebraic and FEN parsers).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "board coordinate out of range");
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a row/col delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Square contents for the whole board, indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

#[inline]
pub fn piece_on_square(board: &Board, coord: Coord) -> Option<Piece> {
    board[coord.row() as usize][coord.col() as usize]
}

#[inline]
pub fn set_square(board: &mut Board, coord: Coord, contents: Option<Piece>) {
    board[coord.row() as usize][coord.col() as usize] = contents;
}
