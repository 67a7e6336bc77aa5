//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the listening port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration.
///
/// Precedence, lowest first: defaults, the TOML file, `env_port`
/// (the value of `PORT`), then `cli_port`.
pub fn resolve_config(
    file: Option<&Path>,
    env_port: Option<&str>,
    cli_port: Option<u16>,
) -> Result<GatewayConfig, ConfigError> {
    let mut config = match file {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    if let Some(raw) = env_port.filter(|raw| !raw.is_empty()) {
        config.listener.port = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
    }
    if let Some(port) = cli_port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
