//! Board state validation logic

use super::{
    board::{BoardState, Player},
    lines::WINNING_LINES,
};

impl BoardState {
    /// Check if the board state could arise in a real game.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`is_valid`](Self::is_valid), but names the rule that failed.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let (x_count, o_count) = self.piece_counts();
        let unreachable = |reason: &str| crate::Error::UnreachableBoard {
            board: self.encode(),
            reason: reason.to_string(),
        };

        if x_count.abs_diff(o_count) > 1 {
            return Err(unreachable("piece counts must differ by at most 1"));
        }

        let diff = x_count as isize - o_count as isize;
        let turn_ok = match self.to_move {
            Player::X => diff == 0 || diff == -1,
            Player::O => diff == 0 || diff == 1,
        };
        if !turn_ok {
            return Err(unreachable("player to move is inconsistent with piece counts"));
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(unreachable("both players cannot have winning lines"));
        }

        // The winner moved last, so the turn must belong to the opponent.
        for (won, player) in [(x_wins, Player::X), (o_wins, Player::O)] {
            if !won {
                continue;
            }
            if self.to_move != player.opponent() {
                return Err(unreachable("the winner cannot be the player to move"));
            }
            if !self.winning_lines_share_cell(player) {
                return Err(unreachable("winning lines were not completed by a single move"));
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let winning_lines: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == cell))
            .collect();

        if winning_lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| winning_lines.iter().all(|line| line.contains(&pos)))
    }

    /// Count valid states reachable from the empty board with X to move
    pub fn count_valid_states() -> usize {
        let mut count = 0;
        let mut stack = vec![BoardState::new()];
        let mut seen = std::collections::HashSet::new();

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }

            if state.is_valid() {
                count += 1;
                for pos in state.legal_moves() {
                    if let Ok(next) = state.make_move(pos) {
                        stack.push(next);
                    }
                }
            }
        }

        count
    }
}
