//! Crate root module declarations for the Cherry Chess project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! players, the CLI front-end, and utility helpers) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod game_state {
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_generator;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
    pub mod pseudo_moves_sliding;
}

pub mod players {
    pub mod random_player;
}

pub mod cli {
    pub mod cli_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
}
