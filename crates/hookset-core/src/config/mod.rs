//! Configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate. Each
//! sub-module represents a logical configuration section.

pub mod hooks;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::hooks::HooksConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides, e.g. `HOOKSET__HOOKS__RAISE_ON_HALT=true`.
pub const ENV_PREFIX: &str = "HOOKSET";

/// Root configuration.
///
/// Every section has defaults, so an empty source produces a usable config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hook registry and lifecycle settings.
    #[serde(default)]
    pub hooks: HooksConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// (`config/{env}`) and environment variables prefixed with `HOOKSET__`.
    /// Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("hooks.extra_hooks")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
