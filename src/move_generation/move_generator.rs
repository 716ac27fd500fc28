use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

/// Failures of the generation pipeline itself. Individual illegal moves
/// are not errors, they are simply absent from the output; this fires when
/// the probe machinery finds the state inconsistent with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// A source of legal moves for the side to move.
///
/// The state is taken mutably because implementations are free to probe it
/// with make/undo pairs and to refresh its terminal flags; they must hand
/// it back exactly as received apart from those flags.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>>;
}
