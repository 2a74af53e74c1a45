//! Game configuration

use std::{
    io::{self, BufRead, Write},
    path::Path,
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    coordinator::GameMode,
    ports::Strategy,
    strategies::{Console, Difficulty, HumanStrategy, mixed::DEFAULT_SEARCH_PROBABILITY},
    tictactoe::Player,
};

/// Settings for a game or session.
///
/// Every field has a default, so a JSON file only needs the values it
/// changes.
///
/// # Examples
///
/// ```
/// use oxo::{GameConfig, coordinator::GameMode, strategies::Difficulty};
///
/// let config = GameConfig::default()
///     .with_mode(GameMode::AiVsAi)
///     .with_difficulty(Difficulty::Medium)
///     .with_medium_probability(0.8)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who plays each side
    pub mode: GameMode,

    /// Strength of the AI opponent in human-vs-AI games
    pub difficulty: Difficulty,

    /// Chance that a medium AI consults the search on a move
    pub medium_probability: f64,

    /// Pause before each AI move, in milliseconds
    pub think_delay_ms: u64,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Which player opens every game
    pub first_player: Player,

    /// Finished games kept in the session history
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            medium_probability: DEFAULT_SEARCH_PROBABILITY,
            think_delay_ms: 0,
            seed: None,
            first_player: Player::X,
            history_limit: 10,
        }
    }
}

impl GameConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_medium_probability(mut self, probability: f64) -> Self {
        self.medium_probability = probability;
        self
    }

    pub fn with_think_delay_ms(mut self, delay_ms: u64) -> Self {
        self.think_delay_ms = delay_ms;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Check values that serde cannot rule out on its own.
    pub fn validate(&self) -> Result<()> {
        crate::strategies::mixed::validate_probability(self.medium_probability)?;
        if self.history_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "history_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("open config {}", path.display()), e))?;
        let config: Self = serde_json::from_reader(io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(|e| Error::io(format!("create config {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Default strategies for `mode`, as `(x, o)`.
    ///
    /// Human sides all read and prompt through `console`. In human-vs-AI
    /// games the AI plays O at the configured difficulty; in AI-vs-AI games
    /// both sides are unbeatable and the console is unused.
    pub fn strategies_for<R, W>(
        &self,
        mode: GameMode,
        console: &Console<R, W>,
    ) -> Result<(Box<dyn Strategy>, Box<dyn Strategy>)>
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        let o_seed = self.seed.map(|s| s.wrapping_add(1));
        let human = |name: &str| -> Box<dyn Strategy> {
            Box::new(HumanStrategy::new(name, console.clone()))
        };
        match mode {
            GameMode::HumanVsAi => Ok((
                human("Player X"),
                self.difficulty
                    .into_boxed_strategy(self.medium_probability, o_seed)?,
            )),
            GameMode::AiVsAi => Ok((
                Difficulty::Unbeatable.into_boxed_strategy(self.medium_probability, self.seed)?,
                Difficulty::Unbeatable.into_boxed_strategy(self.medium_probability, o_seed)?,
            )),
            GameMode::HumanVsHuman => Ok((human("Player X"), human("Player O"))),
        }
    }
}
