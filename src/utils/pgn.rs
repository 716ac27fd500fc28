//! PGN-style read/write utilities for game history interchange.
//!
//! Serializes move history and headers to PGN text and parses PGN back
//! into a replayed game, validating every move against the generator on
//! the way in. Moves are written in the engine's four-character square
//! pair form rather than standard algebraic.

use std::collections::BTreeMap;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::utils::long_algebraic::{find_legal_move, long_algebraic_to_coords};

#[derive(Debug, Clone)]
pub struct GameLog {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub move_history: Vec<Move>,
    pub final_state: GameState,
    pub result: String,
}

/// Game result derived from the terminal flags. Meaningful after a
/// legal-move query has refreshed them; the mated side is the side to
/// move, so its opponent takes the win.
pub fn result_token(game_state: &GameState) -> &'static str {
    if game_state.checkmate {
        match game_state.side_to_move {
            Color::Light => "0-1",
            Color::Dark => "1-0",
        }
    } else if game_state.stalemate {
        "1/2-1/2"
    } else {
        "*"
    }
}

/// Write a game log with the default header set. A non-standard initial
/// position is recorded through the `SetUp`/`FEN` header pair.
pub fn write_game_log(initial_state: &GameState, move_history: &[Move], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Cherry Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "Light".to_owned());
    headers.insert("Black".to_owned(), "Dark".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_game_log_with_headers(move_history, &headers)
}

/// Write a game log with caller-supplied headers. The history is rendered
/// as-is; coherence with any FEN header is revalidated by the reader when
/// the log is loaded back.
pub fn write_game_log_with_headers(
    move_history: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, mv.notation()));
        } else {
            movetext_parts.push(mv.notation());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Parse a game log and replay it move by move. Every token must match a
/// generated legal move in its position, so a log that passed through
/// this function is known to be a playable game.
pub fn read_game_log(text: &str) -> Result<GameLog, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or("Game log SetUp=1 is present but FEN header is missing")?;
        GameState::from_fen(fen)?
    } else {
        GameState::new_game()
    };

    let mut state = initial_state.clone();
    let mut result = "*".to_owned();

    let movetext = strip_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = normalize_result(cleaned).to_owned();
            break;
        }

        let (origin, destination) = long_algebraic_to_coords(cleaned)?;
        let legal = state.valid_moves().map_err(|err| err.to_string())?;
        let mv = find_legal_move(&legal, origin, destination)
            .ok_or_else(|| format!("Illegal move in game log: {cleaned}"))?;
        state.make_move(mv).map_err(|err| err.to_string())?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(GameLog {
        headers,
        initial_state,
        move_history: state.move_history.clone(),
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(format!("Invalid game log header line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| format!("Invalid game log header key: {line}"))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid game log header value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted game log header value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    if token.ends_with('.') {
        return token
            .trim_end_matches('.')
            .chars()
            .all(|c| c.is_ascii_digit());
    }
    if token.contains("...") {
        let head = token.split("...").next().unwrap_or_default();
        return !head.is_empty() && head.chars().all(|c| c.is_ascii_digit());
    }
    false
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_header_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
