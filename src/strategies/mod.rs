//! Move strategies: adapters implementing the [`Strategy`](crate::ports::Strategy) port
//!
//! - [`OptimalStrategy`] always plays the searched move
//! - [`MixedStrategy`] searches with a fixed probability, otherwise plays randomly
//! - [`RandomStrategy`] picks a uniformly random empty cell
//! - [`HumanStrategy`] reads cell numbers from a shared [`Console`]
//! - [`ScriptedStrategy`] replays a fixed sequence of moves

pub mod difficulty;
pub mod human;
pub mod mixed;
pub mod optimal;
pub mod random;
pub mod scripted;

pub use difficulty::Difficulty;
pub use human::{Console, HumanStrategy};
pub use mixed::MixedStrategy;
pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;
pub use scripted::ScriptedStrategy;

use rand::{Rng, rngs::StdRng};

use crate::{Error, Result, tictactoe::BoardState};

/// Uniformly random legal move.
pub(crate) fn random_legal_move(rng: &mut StdRng, state: &BoardState) -> Result<usize> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(Error::NoValidMoves);
    }
    let index = rng.random_range(0..moves.len());
    Ok(moves[index])
}
