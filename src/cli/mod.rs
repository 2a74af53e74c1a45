//! Command-line interface for the oxo engine
//!
//! Subcommands play interactive games, analyze single positions, and run
//! headless AI-vs-AI duels.

pub mod commands;
pub mod logging;
pub mod output;
pub mod render;

use crate::tictactoe::Player;

/// Parse `x`/`o` command-line values into a [`Player`]
pub fn parse_player_token(value: &str) -> Result<Player, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "second" | "p2" => Ok(Player::O),
        other => Err(format!("invalid player '{other}' (expected 'x' or 'o')")),
    }
}
