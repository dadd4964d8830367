//! Diagnostic tracing for the checker.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Reports are
//! printed to stdout and are unaffected by it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset. At that level the
/// checker reports records dropped from the batch for a structural error
/// (with their source index) and record ids that occur more than once.
/// `info` adds the normalized batch size and the pass/fail tally of a run;
/// `debug` adds each check's outcome and summary, and the first position
/// where the sort order diverges.
///
/// # Example
/// ```bash
/// RUST_LOG=moviecheck=debug moviecheck check response.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
