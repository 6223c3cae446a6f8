//! Generator settings from the environment.
//!
//! `BOARD_CONFIG` may point to a JSON `GeneratorConfig`; `BOARD_VARIANT`,
//! `PORT_MODE`, `BOARD_SEED` and `MAX_ATTEMPTS` override individual fields.

use catan_boardgen::{BoardVariant, GenerationError, GeneratorConfig, PortMode, RetryPolicy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Build the config from the process environment
pub fn load_config() -> Result<GeneratorConfig, SettingsError> {
    load_config_from(|var| std::env::var(var).ok())
}

/// Build the config from any variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<GeneratorConfig, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("BOARD_CONFIG") {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
                path: path.clone(),
                source,
            })?;
            GeneratorConfig::from_json(&json)
                .map_err(|source| SettingsError::Parse { path, source })?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(variant) = lookup("BOARD_VARIANT") {
        config.variant = variant.parse::<BoardVariant>()?.into();
    }

    if let Some(mode) = lookup("PORT_MODE") {
        config.port_mode = Some(mode.parse::<PortMode>()?);
    } else if config.port_mode.is_none() && config.variant.has_ports() {
        config.port_mode = Some(PortMode::Standard);
    }

    if let Some(seed) = lookup("BOARD_SEED") {
        config.seed = Some(parse_number("BOARD_SEED", &seed)?);
    }

    if let Some(max) = lookup("MAX_ATTEMPTS") {
        config.retry = RetryPolicy::Bounded {
            max_attempts: parse_number("MAX_ATTEMPTS", &max)?,
        };
    }

    Ok(config)
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, SettingsError> {
    value.trim().parse().map_err(|_| SettingsError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
