//! Tic-Tac-Toe minimax engine with alpha-beta pruning
//!
//! This crate provides:
//! - A board model with parsing, win detection and reachability checks
//! - A game-tree search engine (minimax with alpha-beta pruning)
//! - Move strategies for each difficulty level, plus human and scripted players
//! - A turn coordinator that runs games and keeps session statistics
//! - The `oxo` command-line interface

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod ports;
pub mod search;
pub mod strategies;
pub mod tictactoe;

pub use config::GameConfig;
pub use coordinator::{GameMode, TurnCoordinator};
pub use error::{Error, Result};
pub use search::{Perspective, SearchResult, Searcher, search};
pub use strategies::Difficulty;
