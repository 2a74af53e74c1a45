//! Named AI difficulty levels

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{MixedStrategy, OptimalStrategy, RandomStrategy};
use crate::{Error, Result, ports::Strategy};

/// How strongly an AI side plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell
    Easy,
    /// Search with a fixed probability, random otherwise
    Medium,
    /// Always search
    #[default]
    #[serde(alias = "hard")]
    Unbeatable,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Unbeatable];

    /// Capitalised name shown in game history
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Unbeatable => "Unbeatable",
        }
    }

    /// Build the strategy for this level.
    ///
    /// `medium_probability` only matters for [`Difficulty::Medium`]; `seed`
    /// makes the random choices reproducible.
    pub fn into_boxed_strategy(
        self,
        medium_probability: f64,
        seed: Option<u64>,
    ) -> Result<Box<dyn Strategy>> {
        let name = self.to_string();
        let strategy: Box<dyn Strategy> = match self {
            Difficulty::Easy => match seed {
                Some(seed) => Box::new(RandomStrategy::with_seed(name, seed)),
                None => Box::new(RandomStrategy::new(name)),
            },
            Difficulty::Medium => match seed {
                Some(seed) => Box::new(MixedStrategy::with_seed(name, medium_probability, seed)?),
                None => Box::new(MixedStrategy::new(name, medium_probability)?),
            },
            Difficulty::Unbeatable => Box::new(OptimalStrategy::new(name)),
        };
        Ok(strategy)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Unbeatable => "unbeatable",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "unbeatable" | "hard" => Ok(Difficulty::Unbeatable),
            _ => Err(Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, unbeatable".to_string(),
            }),
        }
    }
}
