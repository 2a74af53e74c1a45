//! Session bookkeeping: running statistics and recent-game history

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::GameMode;
use crate::tictactoe::{Game, GameOutcome, Player};

/// Summary of one finished game, as kept in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// When the game ended
    pub finished_at: DateTime<Local>,
    /// Result from the point of view of the mode, e.g. "Win" or "AI 2 Win"
    pub result: String,
    /// AI difficulty, or the mode label when there is no single AI opponent
    pub difficulty: String,
    /// Marks on the final board
    pub moves: usize,
    /// Cells played, in order
    pub positions: Vec<usize>,
    /// First completed line, if the game was won
    pub winning_line: Option<[usize; 3]>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Record a finished game.
    ///
    /// `ai_label` names the AI difficulty in human-vs-AI games; other modes
    /// use their own fixed label.
    pub fn new(mode: GameMode, ai_label: &str, game: &Game, outcome: GameOutcome) -> Self {
        let final_state = game.current_state();
        let difficulty = mode.fixed_label().unwrap_or(ai_label).to_string();

        Self {
            finished_at: Local::now(),
            result: result_label(mode, outcome).to_string(),
            difficulty,
            moves: final_state.occupied_count(),
            positions: game.moves.iter().map(|m| m.position).collect(),
            winning_line: final_state.winning_line(),
            outcome,
        }
    }
}

fn result_label(mode: GameMode, outcome: GameOutcome) -> &'static str {
    match (mode, outcome) {
        (_, GameOutcome::Draw) => "Draw",
        (GameMode::HumanVsAi, GameOutcome::Win(Player::X)) => "Win",
        (GameMode::HumanVsAi, GameOutcome::Win(Player::O)) => "Loss",
        (GameMode::AiVsAi, GameOutcome::Win(Player::X)) => "AI 1 Win",
        (GameMode::AiVsAi, GameOutcome::Win(Player::O)) => "AI 2 Win",
        (GameMode::HumanVsHuman, GameOutcome::Win(Player::X)) => "X Win",
        (GameMode::HumanVsHuman, GameOutcome::Win(Player::O)) => "O Win",
    }
}

/// Win/loss record of the human (X) side against the AI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl SessionStats {
    /// Count one finished game. Draws leave the streak untouched.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => {
                self.wins += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameOutcome::Win(Player::O) => {
                self.losses += 1;
                self.current_streak = 0;
            }
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.losses + self.draws
    }
}

/// Statistics plus the most recent games, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    stats: SessionStats,
    history: VecDeque<GameRecord>,
    history_limit: usize,
}

impl Session {
    pub fn new(history_limit: usize) -> Self {
        Self {
            stats: SessionStats::default(),
            history: VecDeque::new(),
            history_limit,
        }
    }

    /// Add a finished game.
    ///
    /// Statistics only follow human-vs-AI games; every mode enters the history.
    pub fn push(&mut self, mode: GameMode, record: GameRecord) {
        if mode == GameMode::HumanVsAi {
            self.stats.record(record.outcome);
        }
        self.history.push_front(record);
        self.history.truncate(self.history_limit);
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Recent games, newest first
    pub fn history(&self) -> impl Iterator<Item = &GameRecord> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Totals of a [`TurnCoordinator::play_session`](super::TurnCoordinator::play_session) run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub games_played: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub stats: SessionStats,
    pub history: Vec<GameRecord>,
}

impl SessionSummary {
    pub(crate) fn count(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_game(moves: &[usize]) -> Game {
        let mut game = Game::new();
        for &pos in moves {
            game.play(pos).unwrap();
        }
        game
    }

    #[test]
    fn test_streak_rules() {
        let mut stats = SessionStats::default();
        stats.record(GameOutcome::Win(Player::X));
        stats.record(GameOutcome::Win(Player::X));
        stats.record(GameOutcome::Draw);
        assert_eq!(stats.current_streak, 2);
        stats.record(GameOutcome::Win(Player::X));
        assert_eq!(stats.max_streak, 3);
        stats.record(GameOutcome::Win(Player::O));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert_eq!((stats.wins, stats.losses, stats.draws), (3, 1, 1));
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_record_labels_per_mode() {
        let game = finished_game(&[0, 3, 1, 4, 2]);
        let outcome = GameOutcome::Win(Player::X);

        let record = GameRecord::new(GameMode::HumanVsAi, "Medium", &game, outcome);
        assert_eq!(record.result, "Win");
        assert_eq!(record.difficulty, "Medium");
        assert_eq!(record.moves, 5);
        assert_eq!(record.positions, vec![0, 3, 1, 4, 2]);
        assert_eq!(record.winning_line, Some([0, 1, 2]));

        let record = GameRecord::new(GameMode::AiVsAi, "Medium", &game, outcome);
        assert_eq!(record.result, "AI 1 Win");
        assert_eq!(record.difficulty, "AI vs AI");

        let record = GameRecord::new(GameMode::HumanVsHuman, "Medium", &game, outcome);
        assert_eq!(record.result, "X Win");
        assert_eq!(record.difficulty, "Human vs Human");
    }

    #[test]
    fn test_history_is_newest_first_and_capped() {
        let game = finished_game(&[0, 3, 1, 4, 2]);
        let mut session = Session::new(3);
        for i in 0..5 {
            let mut record =
                GameRecord::new(GameMode::HumanVsAi, "Easy", &game, GameOutcome::Draw);
            record.moves = i;
            session.push(GameMode::HumanVsAi, record);
        }

        let moves: Vec<usize> = session.history().map(|r| r.moves).collect();
        assert_eq!(moves, vec![4, 3, 2]);
        assert_eq!(session.stats().draws, 5);
    }

    #[test]
    fn test_unbounded_limit_allocates_lazily() {
        let game = finished_game(&[0, 3, 1, 4, 2]);
        let mut session = Session::new(usize::MAX);
        session.push(
            GameMode::HumanVsAi,
            GameRecord::new(GameMode::HumanVsAi, "Easy", &game, GameOutcome::Win(Player::X)),
        );
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_only_human_vs_ai_updates_stats() {
        let game = finished_game(&[0, 3, 1, 4, 2]);
        let outcome = GameOutcome::Win(Player::X);
        let mut session = Session::new(10);
        session.push(
            GameMode::AiVsAi,
            GameRecord::new(GameMode::AiVsAi, "", &game, outcome),
        );
        session.push(
            GameMode::HumanVsHuman,
            GameRecord::new(GameMode::HumanVsHuman, "", &game, outcome),
        );
        assert_eq!(session.stats().total(), 0);
        assert_eq!(session.history_len(), 2);
    }
}
