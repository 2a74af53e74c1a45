//! Partially optimal play ("medium")

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use super::random_legal_move;
use crate::{
    Error, Result,
    ports::Strategy,
    search::Searcher,
    tictactoe::BoardState,
};

/// Default chance of consulting the search on each move
pub const DEFAULT_SEARCH_PROBABILITY: f64 = 0.5;

/// Plays the searched move with probability `p`, a uniformly random empty
/// cell otherwise.
///
/// `p = 1.0` plays like [`OptimalStrategy`](super::OptimalStrategy) and
/// `p = 0.0` like [`RandomStrategy`](super::RandomStrategy).
pub struct MixedStrategy {
    name: String,
    search_probability: f64,
    searcher: Searcher,
    rng: StdRng,
}

impl MixedStrategy {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless `search_probability`
    /// lies in `[0, 1]`.
    pub fn new(name: impl Into<String>, search_probability: f64) -> Result<Self> {
        Self::with_seed(name, search_probability, random())
    }

    /// Create a mixed strategy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, search_probability: f64, seed: u64) -> Result<Self> {
        validate_probability(search_probability)?;
        Ok(Self {
            name: name.into(),
            search_probability,
            searcher: Searcher::default(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn search_probability(&self) -> f64 {
        self.search_probability
    }
}

pub(crate) fn validate_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidConfiguration {
            message: format!("search probability must be between 0 and 1, got {p}"),
        });
    }
    Ok(())
}

impl Strategy for MixedStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        if self.rng.random_bool(self.search_probability) {
            let result = self.searcher.best_move(state);
            debug!(
                strategy = %self.name,
                score = result.score,
                best_move = ?result.best_move,
                "searched move"
            );
            return result.best_move.ok_or(Error::NoValidMoves);
        }

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
