//! Interactive command-line front-end.
//!
//! Reads commands line by line from stdin, keeps the current game plus the
//! position it was set up from, and prints boards, legal moves, and game
//! logs in response.

use std::io::{self, BufRead, Write};

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::perft::perft;
use crate::players::random_player::RandomPlayer;
use crate::utils::long_algebraic::{find_legal_move, long_algebraic_to_coords};
use crate::utils::pgn::{result_token, write_game_log};
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut cli = CliState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = cli.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliState {
    game_state: GameState,
    /// Position the current game was set up from, kept for game logs.
    initial_state: GameState,
    random_player: RandomPlayer,
}

impl CliState {
    fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            initial_state: GameState::new_game(),
            random_player: RandomPlayer::new(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "new" => {
                self.game_state = GameState::new_game();
                self.initial_state = GameState::new_game();
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "fen" => {
                writeln!(out, "{}", self.game_state.get_fen())?;
            }
            "moves" => match self.game_state.valid_moves() {
                Ok(moves) if moves.is_empty() => writeln!(out, "no legal moves")?,
                Ok(moves) => {
                    let notations = moves.iter().map(Move::notation).collect::<Vec<_>>();
                    writeln!(out, "{}", notations.join(" "))?;
                }
                Err(err) => writeln!(out, "move generation error: {}", err)?,
            },
            "undo" => match self.game_state.undo_move() {
                Some(mv) => {
                    writeln!(out, "undid {}", mv.notation())?;
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            "move" => match parts.next() {
                Some(lan) => self.submit_move(lan, out)?,
                None => writeln!(out, "usage: move <from><to>, e.g. move e2e4")?,
            },
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "position error: {}", err)?;
                }
            }
            "log" => {
                // Refresh the terminal flags so the derived result is current.
                if let Err(err) = self.game_state.valid_moves() {
                    writeln!(out, "move generation error: {}", err)?;
                } else {
                    let result = parts
                        .next()
                        .unwrap_or_else(|| result_token(&self.game_state));
                    let log = write_game_log(
                        &self.initial_state,
                        &self.game_state.move_history,
                        result,
                    );
                    write!(out, "{}", log)?;
                }
            }
            "random" => match self.random_player.pick_move(&mut self.game_state) {
                Ok(Some(mv)) => {
                    let lan = mv.notation();
                    if let Err(err) = self.game_state.make_move(mv) {
                        writeln!(out, "move error: {}", err)?;
                    } else {
                        writeln!(out, "played {}", lan)?;
                        writeln!(out, "{}", render_game_state(&self.game_state))?;
                        self.report_status(out)?;
                    }
                }
                Ok(None) => self.report_status(out)?,
                Err(err) => writeln!(out, "move generation error: {}", err)?,
            },
            "perft" => match parts.next().and_then(|x| x.parse::<u8>().ok()) {
                Some(depth) => match perft(&LegalMoveGenerator, &mut self.game_state, depth) {
                    Ok(counts) => writeln!(
                        out,
                        "perft {}: {} nodes, {} captures, {} promotions",
                        depth, counts.nodes, counts.captures, counts.promotions
                    )?,
                    Err(err) => writeln!(out, "perft error: {}", err)?,
                },
                None => writeln!(out, "usage: perft <depth>")?,
            },
            "quit" | "exit" => {
                return Ok(true);
            }
            other if long_algebraic_to_coords(other).is_ok() => {
                self.submit_move(other, out)?;
            }
            other => {
                writeln!(
                    out,
                    "unknown command '{}', try: new board fen moves move undo position log random perft quit",
                    other
                )?;
            }
        }

        Ok(false)
    }

    /// Apply one move given as a four-character square pair. Anything that
    /// goes wrong becomes a printed notice; the loop itself never aborts.
    fn submit_move(&mut self, lan: &str, out: &mut impl Write) -> io::Result<()> {
        let (origin, destination) = match long_algebraic_to_coords(lan) {
            Ok(pair) => pair,
            Err(err) => return writeln!(out, "{}", err),
        };

        let legal = match self.game_state.valid_moves() {
            Ok(moves) => moves,
            Err(err) => return writeln!(out, "move generation error: {}", err),
        };

        let Some(mv) = find_legal_move(&legal, origin, destination) else {
            return writeln!(out, "illegal move: {}", lan);
        };

        if let Err(err) = self.game_state.make_move(mv) {
            return writeln!(out, "move error: {}", err);
        }

        writeln!(out, "{}", render_game_state(&self.game_state))?;
        self.report_status(out)
    }

    /// One-line game status, refreshed through a legal-move query so the
    /// terminal flags reflect the position being reported.
    fn report_status(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let Err(err) = self.game_state.valid_moves() {
            return writeln!(out, "move generation error: {}", err);
        }

        if self.game_state.checkmate {
            let winner = self.game_state.side_to_move.opposite();
            writeln!(out, "checkmate, {} wins", winner.name())
        } else if self.game_state.stalemate {
            writeln!(out, "stalemate")
        } else if self.game_state.in_check() {
            writeln!(out, "{} to move, in check", self.game_state.side_to_move.name())
        } else {
            writeln!(out, "{} to move", self.game_state.side_to_move.name())
        }
    }

    fn handle_position(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let base_state = if let Some(tok) = tokens.next() {
            match tok {
                "startpos" => GameState::new_game(),
                "fen" => {
                    let mut fen_parts = Vec::<String>::new();
                    while let Some(next) = tokens.peek() {
                        if *next == "moves" {
                            break;
                        }
                        fen_parts.push(tokens.next().unwrap_or_default().to_owned());
                    }
                    if fen_parts.is_empty() {
                        return Err("missing FEN after 'position fen'".to_owned());
                    }
                    let fen = fen_parts.join(" ");
                    GameState::from_fen(&fen)?
                }
                other => return Err(format!("unsupported position token '{}'", other)),
            }
        } else {
            return Err("incomplete position command".to_owned());
        };

        // Replay onto a scratch copy so a bad move leaves the session alone.
        let mut state = base_state.clone();
        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for lan in tokens {
                let (origin, destination) = long_algebraic_to_coords(lan)?;
                let legal = state.valid_moves().map_err(|err| err.to_string())?;
                let mv = find_legal_move(&legal, origin, destination)
                    .ok_or_else(|| format!("illegal move in position command: {}", lan))?;
                state.make_move(mv).map_err(|err| err.to_string())?;
            }
        }

        self.initial_state = base_state;
        self.game_state = state;
        Ok(())
    }
}
