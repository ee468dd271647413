//! Process logging setup.
//!
//! Responsibilities:
//! - Install the global `tracing` subscriber, writing to stderr.
//! - Switch the filter to the validated `LOG_LEVEL` once a configuration exists.
//!
//! Invariants:
//! - `RUST_LOG`, when set and parseable, always wins over `LOG_LEVEL`.
//! - Until a configuration is validated the filter is `warn`.

use medellin_config::{Choice, LogLevel};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Filter used before a configuration has been validated.
const STARTUP_FILTER: &str = "warn";

/// Handle for adjusting the log filter after startup.
pub struct LogHandle {
    /// `None` when `RUST_LOG` pinned the filter.
    reload: Option<reload::Handle<EnvFilter, Registry>>,
}

/// Install the global subscriber.
pub fn init() -> LogHandle {
    let from_env = EnvFilter::try_from_default_env().ok();
    let pinned = from_env.is_some();
    let (filter, handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new(STARTUP_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    LogHandle {
        reload: (!pinned).then_some(handle),
    }
}

impl LogHandle {
    /// Apply the configured log level unless `RUST_LOG` is in charge.
    pub fn apply(&self, level: LogLevel) {
        let Some(handle) = &self.reload else {
            return;
        };
        if let Err(e) = handle.reload(level_filter(level)) {
            tracing::warn!(error = %e, "failed to apply LOG_LEVEL");
        }
    }
}

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_str())
}
