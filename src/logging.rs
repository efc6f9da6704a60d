use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable that overrides the log filter (e.g. `RIGCHECK_LOG=rigcheck=trace`)
pub const LOG_ENV_VAR: &str = "RIGCHECK_LOG";

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "rigcheck=debug,warn"
    } else {
        "warn"
    }
}

/// Initialize diagnostic logging on stderr.
///
/// Progress messages for users go through the `ProgressReporter` port; this
/// layer is for diagnostics only. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_filter(env_filter);

    // try_init so tests that initialize twice don't panic
    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(verbose, "logging initialized");
    }
}
