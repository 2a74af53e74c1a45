//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(state: &BoardState) -> Option<Self> {
        if let Some(winner) = state.winner() {
            Some(GameOutcome::Win(winner))
        } else if state.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    current: BoardState,
}

impl Game {
    /// Create a new game with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new game with the given player opening
    pub fn new_with_player(first_player: Player) -> Self {
        let initial = BoardState::new_with_player(first_player);
        Game {
            initial,
            moves: Vec::new(),
            outcome: None,
            current: initial,
        }
    }

    /// Play a move for the player whose turn it is
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let new_state = self.current.make_move(position)?;

        self.moves.push(Move {
            position,
            player: self.current.to_move,
        });
        self.current = new_state;
        self.outcome = GameOutcome::of(&new_state);

        Ok(())
    }

    /// Current board state
    pub fn current_state(&self) -> BoardState {
        self.current
    }

    /// Whether the game has reached a terminal board
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Rebuild the sequence of board states from the move history
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move is illegal, which indicates corrupted
    /// game data (e.g. a hand-edited serialized game).
    pub fn state_sequence(&self) -> Result<Vec<BoardState>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);

        for m in &self.moves {
            state = state.make_move(m.position)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_until_win() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(game.play(8), Err(crate::Error::GameOver)));
        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[1].player, Player::O);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(4).unwrap();
        assert!(matches!(
            game.play(4),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_state_sequence_matches_current() {
        let mut game = Game::new_with_player(Player::O);
        for pos in [4, 0, 8] {
            game.play(pos).unwrap();
        }

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 4);
        assert_eq!(states[0], game.initial);
        assert_eq!(*states.last().unwrap(), game.current_state());
        assert_eq!(game.current_state().to_move, Player::X);
    }
}
