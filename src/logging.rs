//! Diagnostic logging on stderr.
//!
//! Reports go to stdout; everything emitted through `tracing` goes to
//! stderr so `--json` output stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `verbose` selects the `debug` level (one line per file checked),
/// otherwise `info`. `RUST_LOG` takes precedence when set. Calling this
/// twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
