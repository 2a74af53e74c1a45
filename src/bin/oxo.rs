//! oxo CLI - tic-tac-toe with a minimax engine
//!
//! - `play`: interactive games against the engine or another person
//! - `analyze`: best move and search statistics for one position
//! - `duel`: AI-vs-AI matches at chosen difficulties

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with a minimax search engine", long_about = None)]
struct Cli {
    /// Log engine decisions to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal
    Play(oxo::cli::commands::play::PlayArgs),

    /// Search a single position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Pit two AI difficulties against each other
    Duel(oxo::cli::commands::duel::DuelArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    oxo::cli::logging::init(cli.verbose);

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Duel(args) => oxo::cli::commands::duel::execute(args),
    }
}
