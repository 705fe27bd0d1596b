//! Tracing subscriber setup for binaries and test harnesses embedding
//! hookset.

use tracing_subscriber::{EnvFilter, fmt};

use hookset_core::config::logging::LoggingConfig;
use hookset_core::{AppError, AppResult};

/// Installs the global tracing subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            AppError::configuration(format!("Invalid log level '{}': {e}", config.level))
        })?;

    let installed = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        "pretty" => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown log format '{other}'. Expected one of: json, pretty"
            )));
        }
    };

    installed.map_err(|e| AppError::internal(format!("Failed to install subscriber: {e}")))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
