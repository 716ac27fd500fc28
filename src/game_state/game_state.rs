//! Central mutable game model.
//!
//! `GameState` stores the board grid, the side to move, the move history,
//! the cached king locations, and the terminal flags. Moves are applied by
//! mutating in place; the history doubles as the undo stack because each
//! `Move` record carries everything needed to invert itself.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    /// Square contents, `[row][col]` with row 0 holding rank 8.
    pub board: Board,
    pub side_to_move: Color,

    /// Every move applied so far, oldest first. Undo pops from the back.
    pub move_history: Vec<Move>,

    /// Cached king squares indexed by [`Color::index`], kept in lockstep
    /// with the board so check tests never scan for a king.
    pub king_locations: [Coord; 2],

    /// Terminal flags, refreshed by every legal-move query.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Coord {
        self.king_locations[color.index()]
    }

    /// Apply a move: vacate the origin, overwrite the destination, flip the
    /// turn, and push the record onto the history.
    ///
    /// The move must match the board (its origin holds exactly the recorded
    /// piece) and the side to move; violations return a [`MoveError`] before
    /// anything is mutated. Legality beyond that is not checked here, which
    /// is what lets the generator probe candidate moves through this same
    /// path.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let Some(found) = piece_on_square(&self.board, mv.origin) else {
            return Err(MoveError::VacantOrigin(mv.origin));
        };
        if found != mv.moved_piece {
            return Err(MoveError::PieceMismatch {
                origin: mv.origin,
                expected: mv.moved_piece,
                found,
            });
        }
        if found.color != self.side_to_move {
            return Err(MoveError::OutOfTurn {
                origin: mv.origin,
                side_to_move: self.side_to_move,
            });
        }

        set_square(&mut self.board, mv.origin, None);
        let placed = if mv.is_promotion {
            Piece::new(mv.moved_piece.color, PieceKind::Queen)
        } else {
            mv.moved_piece
        };
        set_square(&mut self.board, mv.destination, Some(placed));

        if mv.moved_piece.kind == PieceKind::King {
            self.king_locations[mv.moved_piece.color.index()] = mv.destination;
        }

        self.move_history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Revert the most recent move and hand its record back, or `None` when
    /// the history is empty. A promotion reverts to the recorded pawn
    /// because the origin square gets `moved_piece` back, not whatever the
    /// destination holds now.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_history.pop()?;

        set_square(&mut self.board, mv.origin, Some(mv.moved_piece));
        set_square(&mut self.board, mv.destination, mv.captured_piece);

        if mv.moved_piece.kind == PieceKind::King {
            self.king_locations[mv.moved_piece.color.index()] = mv.origin;
        }

        self.side_to_move = self.side_to_move.opposite();
        Some(mv)
    }

    /// Full legal move set for the side to move. Also refreshes the
    /// `checkmate`/`stalemate` flags as a side effect of the query.
    #[inline]
    pub fn valid_moves(&mut self) -> MoveGenResult<Vec<Move>> {
        LegalMoveGenerator.generate_legal_moves(self)
    }

    /// Whether the side to move's king is currently attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }
}
