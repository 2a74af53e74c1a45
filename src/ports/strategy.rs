//! Strategy port - how one side of the board picks its moves
//!
//! Implemented by:
//! - Search-driven policies (unbeatable, medium)
//! - Baselines (uniform random)
//! - Input-driven players (human at a terminal, scripted sequences)

use crate::{Result, tictactoe::BoardState};

/// Move selection policy for one side of a game.
///
/// Difficulty levels live here rather than in the search engine: the turn
/// coordinator only ever asks a `Strategy` for a cell and never knows whether
/// the answer came from the game tree, a random draw, or a keyboard.
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::Strategy,
///     tictactoe::BoardState,
/// };
///
/// struct FirstEmpty;
///
/// impl Strategy for FirstEmpty {
///     fn select_move(&mut self, state: &BoardState) -> oxo::Result<usize> {
///         state
///             .legal_moves()
///             .first()
///             .copied()
///             .ok_or(oxo::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// let mut strategy = FirstEmpty;
/// assert_eq!(strategy.select_move(&BoardState::new()).unwrap(), 0);
/// ```
pub trait Strategy {
    /// Select a move for the player to move in `state`.
    ///
    /// The returned position (0-8) must be empty; the coordinator rejects
    /// anything else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) on a
    /// terminal board. Input-driven strategies may also fail when their
    /// source runs dry.
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Whether a person is behind this strategy.
    ///
    /// Interactive strategies are never delayed by the coordinator's
    /// thinking pause.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Seed the strategy's internal random number generator.
    ///
    /// Deterministic strategies ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
