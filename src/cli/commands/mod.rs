//! One module per subcommand, each with its clap `Args` and an `execute` entry point

pub mod analyze;
pub mod duel;
pub mod play;
