//! Built-in observers: metrics and a progress bar

use std::sync::{Arc, Mutex, MutexGuard};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use super::GameRecord;
use crate::{
    Result,
    ports::Observer,
    tictactoe::{BoardState, GameOutcome, Player},
};

/// Outcome and length counters collected by [`MetricsObserver`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMetrics {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl GameMetrics {
    pub fn draw_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.draws as f64 / self.total_games as f64
        }
    }

    /// Get average game length
    pub fn avg_game_length(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.total_games as f64
        }
    }
}

/// Metrics observer - counts outcomes and moves.
///
/// The counters are shared, so a handle taken with [`metrics`](Self::metrics)
/// keeps working after the observer has been boxed into a coordinator.
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    metrics: Arc<Mutex<GameMetrics>>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the counters
    pub fn metrics(&self) -> Arc<Mutex<GameMetrics>> {
        Arc::clone(&self.metrics)
    }

    /// Copy of the current counters
    pub fn snapshot(&self) -> GameMetrics {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, GameMetrics> {
        self.metrics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Observer for MetricsObserver {
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _state: &BoardState,
        _position: usize,
        _player: Player,
    ) -> Result<()> {
        self.lock().total_moves += 1;
        Ok(())
    }

    fn on_game_end(
        &mut self,
        _game_num: usize,
        record: &GameRecord,
        _final_state: &BoardState,
    ) -> Result<()> {
        let mut metrics = self.lock();
        metrics.total_games += 1;
        match record.outcome {
            GameOutcome::Win(Player::X) => metrics.x_wins += 1,
            GameOutcome::Win(Player::O) => metrics.o_wins += 1,
            GameOutcome::Draw => metrics.draws += 1,
        }
        Ok(())
    }
}

/// Progress bar observer - shows session progress
#[derive(Default)]
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn message(&self) -> String {
        format!("X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Observer for ProgressObserver {
    fn on_session_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(
        &mut self,
        game_num: usize,
        record: &GameRecord,
        _final_state: &BoardState,
    ) -> Result<()> {
        match record.outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_session_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
