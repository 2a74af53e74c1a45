//! Analyze command - search a single position and report the work done

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        output::{format_number, print_kv, print_section, print_subsection},
        parse_player_token,
        render::render_board,
    },
    search::{Perspective, SearchResult, SearchStats, Searcher},
    tictactoe::{BoardState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move for a position")]
pub struct AnalyzeArgs {
    /// Board as nine cells, row-major: X, O and '.' or '_' for empty.
    /// An optional "/x" or "/o" suffix names the side to move.
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the piece counts if omitted
    #[arg(long, value_parser = parse_player_token)]
    pub to_move: Option<Player>,

    /// Side whose wins score positive (`x` or `o`)
    #[arg(long, value_parser = parse_player_token, default_value = "o")]
    pub maximizer: Player,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Results of the pruned and exhaustive searches of one position
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub board: String,
    pub to_move: Player,
    pub maximizer: Player,
    pub result: SearchResult,
    pub pruned: SearchStats,
    pub unpruned: SearchStats,
}

/// Search `state` with and without pruning.
pub fn analyze(state: &BoardState, perspective: Perspective) -> Analysis {
    let mut pruned = Searcher::new(perspective);
    let result = pruned.best_move(state);

    let mut full = Searcher::new(perspective).without_pruning();
    let full_result = full.best_move(state);
    debug_assert_eq!(result, full_result, "pruning changed the search result");

    Analysis {
        board: state.encode(),
        to_move: state.to_move,
        maximizer: perspective.maximizer(),
        result,
        pruned: pruned.stats(),
        unpruned: full.stats(),
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut state = BoardState::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    if let Some(player) = args.to_move {
        state.to_move = player;
    }
    state.validate()?;

    let analysis = analyze(&state, Perspective::new(args.maximizer));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", render_board(&state, state.winning_line()));
    print_kv("To move", &state.to_move.to_string());
    print_kv("Maximizer", &analysis.maximizer.to_string());

    print_subsection("Search");
    print_kv("Score", &analysis.result.score.to_string());
    let best = match analysis.result.best_move {
        Some(pos) => format!("cell {} (index {pos})", pos + 1),
        None => "none (game over)".to_string(),
    };
    print_kv("Best move", &best);

    print_subsection("Work");
    print_kv("Nodes (alpha-beta)", &format_number(analysis.pruned.nodes));
    print_kv("Cutoffs", &format_number(analysis.pruned.cutoffs));
    print_kv("Nodes (minimax)", &format_number(analysis.unpruned.nodes));
    if analysis.unpruned.nodes > 0 {
        let saved = 1.0 - analysis.pruned.nodes as f64 / analysis.unpruned.nodes as f64;
        print_kv("Saved", &format!("{:.1}%", saved * 100.0));
    }

    Ok(())
}
