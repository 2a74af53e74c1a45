//! Play command - interactive games in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    Error, GameConfig,
    cli::{
        output::{print_kv, print_section, print_session},
        render::BoardRenderer,
    },
    coordinator::{GameMode, Session, TurnCoordinator},
    strategies::{Console, Difficulty},
};

/// Thinking pause of AI moves when neither a flag nor a config file sets one
pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe in the terminal")]
pub struct PlayArgs {
    /// Who plays: human-vs-ai, ai-vs-ai or human-vs-human
    #[arg(long, short = 'm')]
    pub mode: Option<GameMode>,

    /// AI strength: easy, medium or unbeatable
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Chance that a medium AI searches instead of moving randomly
    #[arg(long)]
    pub medium_probability: Option<f64>,

    /// Pause before each AI move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Merge the config file (or the interactive defaults) with the flags
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GameConfig::default().with_think_delay_ms(DEFAULT_DELAY_MS),
        };

        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(p) = self.medium_probability {
            config = config.with_medium_probability(p);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_think_delay_ms(delay);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let mode = config.mode;

    print_section("Tic-Tac-Toe");
    print_kv("Mode", &mode.to_string());
    if mode == GameMode::HumanVsAi {
        print_kv("Difficulty", config.difficulty.label());
    }
    print_kv("Cells", "numbered 1-9, left to right, top to bottom");

    info!(mode = %mode, difficulty = %config.difficulty, "starting interactive play");
    run(config, &Console::stdio(), io::stdout())?;
    Ok(())
}

/// Play games until the players decline another round or the input closes.
///
/// Every prompt, including "Play again?", goes through `console`; boards are
/// drawn on `board_out`.
pub fn run<R, W, B>(config: GameConfig, console: &Console<R, W>, board_out: B) -> Result<Session>
where
    R: BufRead + 'static,
    W: Write + 'static,
    B: Write + Send + 'static,
{
    let mode = config.mode;
    let mut coordinator = TurnCoordinator::from_config(config, console)?
        .with_observer(Box::new(BoardRenderer::new(board_out)));

    loop {
        match coordinator.play_game() {
            Ok(_) => {}
            Err(Error::InputClosed { .. }) => {
                console.write("\nInput closed, leaving the game.\n")?;
                break;
            }
            Err(err) => return Err(err.into()),
        }

        print_session(coordinator.session(), mode);

        if !play_again(console)? {
            break;
        }
    }

    Ok(coordinator.session().clone())
}

fn play_again<R: BufRead, W: Write>(console: &Console<R, W>) -> Result<bool> {
    let answer = console
        .ask("\nPlay again? [Y/n] ")
        .context("failed to read answer")?;
    Ok(answer.is_some_and(|answer| {
        !matches!(answer.to_ascii_lowercase().as_str(), "n" | "no" | "q" | "quit")
    }))
}
