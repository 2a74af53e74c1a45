//! Who sits on each side of the board

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Pairing of players for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human plays X against an AI playing O
    #[default]
    HumanVsAi,
    /// Two AIs play each other
    AiVsAi,
    /// Two humans take turns at the same terminal
    HumanVsHuman,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::HumanVsAi, GameMode::AiVsAi, GameMode::HumanVsHuman];

    /// Label stored as the difficulty of games without a single AI opponent
    pub(crate) fn fixed_label(self) -> Option<&'static str> {
        match self {
            GameMode::HumanVsAi => None,
            GameMode::AiVsAi => Some("AI vs AI"),
            GameMode::HumanVsHuman => Some("Human vs Human"),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::HumanVsAi => "human-vs-ai",
            GameMode::AiVsAi => "ai-vs-ai",
            GameMode::HumanVsHuman => "human-vs-human",
        };
        f.write_str(name)
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-ai" => Ok(GameMode::HumanVsAi),
            "ai-vs-ai" => Ok(GameMode::AiVsAi),
            "human-vs-human" => Ok(GameMode::HumanVsHuman),
            _ => Err(Error::ParseGameMode {
                input: s.to_string(),
                expected: "human-vs-ai, ai-vs-ai, human-vs-human".to_string(),
            }),
        }
    }
}
