//! Score sign convention for the search

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Cell, LineAnalyzer, Player};

/// Base score of a decided game; the ply depth is subtracted from it so that
/// faster wins and slower losses score better.
pub const WIN_SCORE: i32 = 10;

/// Which mark the search treats as the maximizing side.
///
/// The default perspective maximizes for O and minimizes for X. Flipping it
/// negates every score but never changes which move is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Perspective {
    maximizer: Player,
}

impl Perspective {
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }

    pub fn maximizer(self) -> Player {
        self.maximizer
    }

    pub fn minimizer(self) -> Player {
        self.maximizer.opponent()
    }

    /// Whether `player` moves as the maximizing side
    pub fn is_maximizing(self, player: Player) -> bool {
        player == self.maximizer
    }

    /// Mark placed by the maximizing or minimizing side
    pub fn mark(self, is_maximizing: bool) -> Cell {
        if is_maximizing {
            self.maximizer.to_cell()
        } else {
            self.minimizer().to_cell()
        }
    }

    /// Score of a terminal board reached `depth` plies below the root, or
    /// `None` while the game is still running.
    pub fn terminal_score(self, cells: &[Cell; 9], depth: u32) -> Option<i32> {
        let depth = i32::try_from(depth).unwrap_or(i32::MAX);
        match LineAnalyzer::winner(cells) {
            Some(winner) if winner == self.maximizer => Some(WIN_SCORE.saturating_sub(depth)),
            Some(_) => Some(depth.saturating_sub(WIN_SCORE)),
            None if !cells.contains(&Cell::Empty) => Some(0),
            None => None,
        }
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::new(Player::O)
    }
}
