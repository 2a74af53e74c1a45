//! Observer port - hooks into a running session
//!
//! The turn coordinator reports every session, game and move to its
//! observers, so progress bars, metrics and board rendering stay out of the
//! game loop itself.

use crate::{
    Result,
    coordinator::GameRecord,
    tictactoe::{BoardState, Player},
};

/// Observer of games driven by the turn coordinator.
///
/// # Event Sequence
///
/// 1. `on_session_start(total_games)` - once, when a session of known length starts
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - after each move has been applied
///    - `on_game_end(game_num, record, final_state)`
/// 3. `on_session_end()` - once at the end
///
/// Games played one at a time through
/// [`TurnCoordinator::play_game`](crate::coordinator::TurnCoordinator::play_game)
/// only produce the per-game events.
///
/// # Examples
///
/// ```
/// use oxo::{
///     coordinator::GameRecord,
///     ports::Observer,
///     tictactoe::BoardState,
/// };
///
/// struct MoveCounter {
///     moves: usize,
/// }
///
/// impl Observer for MoveCounter {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         record: &GameRecord,
///         _final_state: &BoardState,
///     ) -> oxo::Result<()> {
///         self.moves += record.moves;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when a session starts.
    ///
    /// # Parameters
    ///
    /// * `total_games` - Number of games the session will play
    fn on_session_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts, with its 0-based index.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move once it is on the board.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the current game
    /// * `step_num` - Ply within the game (0-based)
    /// * `state` - Board state before the move
    /// * `position` - Cell (0-8) that was played
    /// * `player` - Side that played it
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _state: &BoardState,
        _position: usize,
        _player: Player,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal board.
    fn on_game_end(
        &mut self,
        _game_num: usize,
        _record: &GameRecord,
        _final_state: &BoardState,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a session completes.
    fn on_session_end(&mut self) -> Result<()> {
        Ok(())
    }
}
