//! Duel command - headless AI-vs-AI matches

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    GameConfig,
    cli::output::{print_kv, print_section},
    coordinator::{
        GameMetrics, GameMode, GameRecord, MetricsObserver, ProgressObserver, SessionSummary,
        TurnCoordinator,
    },
    strategies::{Difficulty, mixed::DEFAULT_SEARCH_PROBABILITY},
};

#[derive(Parser, Debug)]
#[command(about = "Let two AIs play each other")]
pub struct DuelArgs {
    /// Difficulty of the X side
    #[arg(long, default_value = "unbeatable")]
    pub x: Difficulty,

    /// Difficulty of the O side
    #[arg(long, default_value = "unbeatable")]
    pub o: Difficulty,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Chance that a medium side searches instead of moving randomly
    #[arg(long, default_value_t = DEFAULT_SEARCH_PROBABILITY)]
    pub medium_probability: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct DuelExport<'a> {
    duel: DuelSection,
    results: ResultsSection,
    recent_games: &'a [GameRecord],
}

#[derive(Serialize)]
struct DuelSection {
    x: Difficulty,
    o: Difficulty,
    games: usize,
    medium_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct ResultsSection {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    draw_rate: f64,
    avg_game_length: f64,
}

/// Play the duel and return the session totals with the move metrics
pub fn run(args: &DuelArgs) -> Result<(SessionSummary, GameMetrics)> {
    let mut config = GameConfig::default()
        .with_mode(GameMode::AiVsAi)
        .with_medium_probability(args.medium_probability);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let o_seed = args.seed.map(|s| s.wrapping_add(1));
    let x = args.x.into_boxed_strategy(args.medium_probability, args.seed)?;
    let o = args.o.into_boxed_strategy(args.medium_probability, o_seed)?;

    let metrics = MetricsObserver::new();
    let handle = metrics.clone();
    let mut coordinator = TurnCoordinator::new(config, x, o).with_observer(Box::new(metrics));
    if !args.quiet {
        coordinator = coordinator.with_observer(Box::new(ProgressObserver::new()));
    }

    info!(x = %args.x, o = %args.o, games = args.games, "starting duel");
    let summary = coordinator.play_session(args.games)?;
    Ok((summary, handle.snapshot()))
}

pub fn execute(args: DuelArgs) -> Result<()> {
    let (summary, metrics) = run(&args)?;

    print_section(&format!("Duel: {} (X) vs {} (O)", args.x, args.o));
    print_kv("Games", &summary.games_played.to_string());
    print_kv("X wins", &summary.x_wins.to_string());
    print_kv("O wins", &summary.o_wins.to_string());
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", summary.draws, metrics.draw_rate() * 100.0),
    );
    print_kv("Avg game length", &format!("{:.2}", metrics.avg_game_length()));

    if let Some(path) = &args.export {
        export_results(&args, &summary, &metrics, path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

fn export_results(
    args: &DuelArgs,
    summary: &SessionSummary,
    metrics: &GameMetrics,
    path: &PathBuf,
) -> Result<()> {
    let export = DuelExport {
        duel: DuelSection {
            x: args.x,
            o: args.o,
            games: args.games,
            medium_probability: args.medium_probability,
            seed: args.seed,
        },
        results: ResultsSection {
            x_wins: summary.x_wins,
            o_wins: summary.o_wins,
            draws: summary.draws,
            draw_rate: metrics.draw_rate(),
            avg_game_length: metrics.avg_game_length(),
        },
        recent_games: &summary.history,
    };

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> DuelArgs {
        let mut argv = vec!["duel", "--quiet"];
        argv.extend_from_slice(extra);
        DuelArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_unbeatable_duel_is_all_draws() {
        let (summary, metrics) = run(&args(&["--games", "3"])).unwrap();
        assert_eq!(summary.draws, 3);
        assert_eq!(metrics.total_moves, 27);
    }

    #[test]
    fn test_seeded_duels_repeat() {
        let a = run(&args(&["--x", "easy", "--o", "medium", "--games", "20", "--seed", "4"])).unwrap();
        let b = run(&args(&["--x", "easy", "--o", "medium", "--games", "20", "--seed", "4"])).unwrap();
        assert_eq!(a.0.x_wins, b.0.x_wins);
        assert_eq!(a.0.o_wins, b.0.o_wins);
        assert_eq!(a.1.total_moves, b.1.total_moves);
    }

    #[test]
    fn test_export_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duel.json");
        let path_arg = path.to_str().unwrap().to_string();
        execute(args(&["--games", "2", "--export", &path_arg])).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["results"]["draws"], 2);
        assert_eq!(json["duel"]["x"], "unbeatable");
        assert_eq!(json["recent_games"].as_array().unwrap().len(), 2);
    }
}
