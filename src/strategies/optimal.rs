//! Unbeatable play: every move comes from the full game-tree search

use tracing::debug;

use crate::{
    Error, Result,
    ports::Strategy,
    search::{Perspective, Searcher},
    tictactoe::BoardState,
};

/// Always plays the move returned by [`Searcher::best_move`].
pub struct OptimalStrategy {
    name: String,
    searcher: Searcher,
}

impl OptimalStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_perspective(name, Perspective::default())
    }

    /// Use a specific score convention; the chosen moves are the same either way.
    pub fn with_perspective(name: impl Into<String>, perspective: Perspective) -> Self {
        Self {
            name: name.into(),
            searcher: Searcher::new(perspective),
        }
    }

    /// The engine backing this strategy, with the counters of its last search
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Strategy for OptimalStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        let result = self.searcher.best_move(state);
        let stats = self.searcher.stats();
        debug!(
            strategy = %self.name,
            board = %state.encode(),
            score = result.score,
            best_move = ?result.best_move,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "searched position"
        );

        result.best_move.ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
