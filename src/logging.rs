//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for
//! command output. `RUST_LOG` overrides the configured level.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| parse_level(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize logging subscriber")
}

fn parse_level(level: &str) -> EnvFilter {
    let level = level.to_lowercase();
    EnvFilter::new(format!("apiref_harness={0},apiref_core={0}", level))
}
