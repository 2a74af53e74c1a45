//! Game-tree search: minimax with alpha-beta pruning

pub mod engine;
pub mod perspective;
mod scratch;

pub use engine::{NEG_INFINITY, POS_INFINITY, SearchResult, SearchStats, Searcher, search};
pub use perspective::{Perspective, WIN_SCORE};
