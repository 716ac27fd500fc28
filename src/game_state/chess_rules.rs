//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN used to initialize and validate game state setup.

/// Standard starting position in Forsyth-Edwards Notation (FEN).
///
/// The castling and en-passant fields are emitted as `-` because this
/// engine does not track either right; the parser still accepts FENs that
/// carry them.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";
