//! Tracing subscriber initialization.
//!
//! Log output goes to the console, filtered by `RUST_LOG` (default `info`). SQLx reports
//! statements through the `log` crate; those records are bridged into `tracing`, so per-statement
//! logging (debug) and slow statement warnings show up alongside the repository spans.
//!
//! ```bash
//! # See every statement the repositories issue
//! RUST_LOG=info,sqlx=debug lightbnb
//! ```

use crate::config::LogFormat;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_telemetry(format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init()?,
    }

    info!(?format, "Telemetry initialized");
    Ok(())
}
