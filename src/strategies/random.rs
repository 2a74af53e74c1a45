//! Uniform random play ("easy")

use rand::{SeedableRng, random, rngs::StdRng};
use tracing::debug;

use super::random_legal_move;
use crate::{Result, ports::Strategy, tictactoe::BoardState};

/// Picks a uniformly random empty cell.
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        let position = random_legal_move(&mut self.rng, state)?;
        debug!(strategy = %self.name, position, "random move");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
