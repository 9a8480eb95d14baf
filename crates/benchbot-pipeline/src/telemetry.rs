//! Tracing initialisation for the benchbot binary.
//!
//! Installs the global `tracing` subscriber with an `EnvFilter` and either
//! plain or JSON line formatting. Calling it a second time is a no-op: the
//! process-global subscriber can only be installed once.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence for filtering when set; otherwise `level` is
/// the default verbosity. With `json` set, log lines come out as
/// newline-delimited JSON for CI log aggregation.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}
