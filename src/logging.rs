use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::paths;

pub const LOG_FILE_NAME: &str = "blackjack_assistant.log";

/// Installs the global subscriber: compact console output plus an appending
/// plain-text log file under `logs/`. `RUST_LOG` overrides the default filter.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("blackjack_assistant=info"));

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::get_logs_dir().join(LOG_FILE_NAME))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(log_file)),
        )
        .try_init()?;

    Ok(())
}
