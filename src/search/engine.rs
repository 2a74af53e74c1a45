//! Minimax search with alpha-beta pruning

use serde::{Deserialize, Serialize};

use super::{perspective::Perspective, scratch::Placement};
use crate::tictactoe::{BoardState, Cell};

/// Lower bound used as "minus infinity" for alpha
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper bound used as "plus infinity" for beta
pub const POS_INFINITY: i32 = i32::MAX;

/// Score and chosen move of a search.
///
/// `best_move` is `None` only when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

/// Work counters for the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Times the remaining children of a node were skipped
    pub cutoffs: u64,
}

/// Reusable game-tree search engine.
///
/// ```
/// use oxo::search::Searcher;
/// use oxo::tictactoe::BoardState;
///
/// // O to move and can complete the middle row.
/// let board = BoardState::from_string("XX.OO.X../O").unwrap();
/// let result = Searcher::default().best_move(&board);
/// assert_eq!(result.best_move, Some(5));
/// assert_eq!(result.score, 9);
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    perspective: Perspective,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(perspective: Perspective) -> Self {
        Self {
            perspective,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax: every child is explored regardless of the bounds.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search the position for the player to move, from depth 0 with the full window.
    pub fn best_move(&mut self, state: &BoardState) -> SearchResult {
        let mut scratch = state.cells;
        let is_maximizing = self.perspective.is_maximizing(state.to_move);
        self.search(&mut scratch, is_maximizing, 0, NEG_INFINITY, POS_INFINITY)
    }

    /// Search `cells` in place.
    ///
    /// Marks are placed and cleared as the tree is walked; the buffer holds
    /// the original position again when this returns. Counters restart on
    /// every call.
    pub fn search(
        &mut self,
        cells: &mut [Cell; 9],
        is_maximizing: bool,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        self.stats = SearchStats::default();
        self.alpha_beta(cells, is_maximizing, depth, alpha, beta)
    }

    fn alpha_beta(
        &mut self,
        cells: &mut [Cell; 9],
        is_maximizing: bool,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(score) = self.perspective.terminal_score(cells, depth) {
            return SearchResult {
                score,
                best_move: None,
            };
        }

        let mark = self.perspective.mark(is_maximizing);
        let mut best_score = if is_maximizing {
            NEG_INFINITY
        } else {
            POS_INFINITY
        };
        let mut best_move = None;

        for position in 0..cells.len() {
            if cells[position] != Cell::Empty {
                continue;
            }

            let score = {
                let mut placed = Placement::new(cells, position, mark);
                self.alpha_beta(&mut placed, !is_maximizing, depth.saturating_add(1), alpha, beta)
                    .score
            };

            // Strict comparison keeps the lowest index among equal scores.
            if is_maximizing {
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(position);
                }
                alpha = alpha.max(best_score);
            } else {
                if best_move.is_none() || score < best_score {
                    best_score = score;
                    best_move = Some(position);
                }
                beta = beta.min(best_score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Perspective::default())
    }
}

/// Search a board with the default perspective (O maximizes).
///
/// The board is copied into a scratch buffer; the caller's cells are never
/// touched.
pub fn search(
    board: &[Cell; 9],
    is_maximizing: bool,
    depth: u32,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    let mut scratch = *board;
    Searcher::default().search(&mut scratch, is_maximizing, depth, alpha, beta)
}
