//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so logs never mix with
/// the board on stdout.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks `debug` over `warn`.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "oxo=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
