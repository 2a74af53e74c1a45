//! The game loop

use std::{
    io::{BufRead, Write},
    thread,
};

use tracing::{debug, info};

use super::{GameMode, GameRecord, Session, SessionSummary};
use crate::{
    Error, Result,
    config::GameConfig,
    ports::{Observer, Strategy},
    strategies::Console,
    tictactoe::{Game, Player},
};

/// Drives games between two strategies.
///
/// Each ply the strategy of the side to move is asked for a cell, which the
/// coordinator then plays on the board. Non-interactive strategies wait for
/// the configured thinking delay first.
pub struct TurnCoordinator {
    config: GameConfig,
    x: Box<dyn Strategy>,
    o: Box<dyn Strategy>,
    observers: Vec<Box<dyn Observer>>,
    session: Session,
    games_played: usize,
}

impl TurnCoordinator {
    pub fn new(config: GameConfig, x: Box<dyn Strategy>, o: Box<dyn Strategy>) -> Self {
        let session = Session::new(config.history_limit);
        Self {
            config,
            x,
            o,
            observers: Vec::new(),
            session,
            games_played: 0,
        }
    }

    /// Build a coordinator with the default strategies of the configured
    /// mode; human sides play through `console`.
    pub fn from_config<R, W>(config: GameConfig, console: &Console<R, W>) -> Result<Self>
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        config.validate()?;
        let (x, o) = config.strategies_for(config.mode, console)?;
        Ok(Self::new(config, x, o))
    }

    /// Add an observer to the coordinator
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Play `games` games in a row, reseeding both sides first when a seed is
    /// configured.
    pub fn play_session(&mut self, games: usize) -> Result<SessionSummary> {
        if let Some(seed) = self.config.seed {
            self.x.set_rng_seed(seed)?;
            self.o.set_rng_seed(seed.wrapping_add(1))?;
        }

        for observer in &mut self.observers {
            observer.on_session_start(games)?;
        }

        let mut summary = SessionSummary::default();
        for _ in 0..games {
            let record = self.play_game()?;
            summary.count(record.outcome);
        }

        for observer in &mut self.observers {
            observer.on_session_end()?;
        }

        summary.stats = *self.session.stats();
        summary.history = self.session.history().cloned().collect();
        info!(
            games = summary.games_played,
            x_wins = summary.x_wins,
            o_wins = summary.o_wins,
            draws = summary.draws,
            "session finished"
        );
        Ok(summary)
    }

    /// Play a single game to the end and record it in the session.
    ///
    /// # Errors
    ///
    /// Fails when a strategy cannot produce a move or proposes an illegal one.
    pub fn play_game(&mut self) -> Result<GameRecord> {
        let game_num = self.games_played;
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new_with_player(self.config.first_player);
        let mut step_num = 0;

        while !game.is_over() {
            let state = game.current_state();
            let player = state.to_move;
            let strategy = match player {
                Player::X => &mut self.x,
                Player::O => &mut self.o,
            };

            let delay = self.config.think_delay();
            if !strategy.is_interactive() && !delay.is_zero() {
                thread::sleep(delay);
            }

            let position = strategy.select_move(&state)?;
            debug!(
                game = game_num,
                step = step_num,
                player = %player,
                strategy = strategy.name(),
                position,
                "move selected"
            );
            game.play(position)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &state, position, player)?;
            }
            step_num += 1;
        }

        let Some(outcome) = game.outcome else {
            return Err(Error::NoValidMoves);
        };
        let record = GameRecord::new(
            self.config.mode,
            self.config.difficulty.label(),
            &game,
            outcome,
        );
        let final_state = game.current_state();

        for observer in &mut self.observers {
            observer.on_game_end(game_num, &record, &final_state)?;
        }

        info!(
            game = game_num,
            mode = %self.config.mode,
            result = %record.result,
            moves = record.moves,
            "game finished"
        );
        self.session.push(self.config.mode, record.clone());
        self.games_played += 1;
        Ok(record)
    }
}
