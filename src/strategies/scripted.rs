//! Fixed move sequences, for tests and replays

use std::collections::VecDeque;

use crate::{Error, Result, ports::Strategy, tictactoe::BoardState};

/// Plays a predetermined list of cells in order.
#[derive(Debug, Clone)]
pub struct ScriptedStrategy {
    name: String,
    moves: VecDeque<usize>,
}

impl ScriptedStrategy {
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        let position = self.moves.pop_front().ok_or_else(|| Error::ScriptExhausted {
            name: self.name.clone(),
        })?;

        if position >= 9 {
            return Err(Error::InvalidPosition { position });
        }
        if !state.is_empty(position) {
            return Err(Error::InvalidMove { position });
        }

        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
