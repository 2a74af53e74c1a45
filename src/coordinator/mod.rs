//! Turn coordination: who moves when, and what happened afterwards
//!
//! The [`TurnCoordinator`] alternates between the two sides' strategies,
//! applies their moves to the board, and keeps the running [`Session`]
//! statistics and history.

pub mod mode;
pub mod observers;
pub mod session;
pub mod turn;

pub use mode::GameMode;
pub use observers::{GameMetrics, MetricsObserver, ProgressObserver};
pub use session::{GameRecord, Session, SessionStats, SessionSummary};
pub use turn::TurnCoordinator;
