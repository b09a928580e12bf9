//! Logging setup for the client binary.
use anyhow::{Result, anyhow};

/// Installs a stderr subscriber filtered by `RUST_LOG` (INFO when unset).
///
/// Output goes to stderr so that stdout stays clean for puzzle and JSON output.
pub fn setup_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
