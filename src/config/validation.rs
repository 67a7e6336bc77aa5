//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the upstream base URL
//! - Validate value ranges (port > 0)
//! - Keep the documentation surface outside the `/api` prefix
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;
use crate::routing::API_PREFIX;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url '{0}' is not a valid URL")]
    InvalidBaseUrl(String),

    #[error("upstream.base_url must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("upstream.base_url must not carry a query string")]
    BaseUrlHasQuery,

    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("{field} '{path}' must start with '/'")]
    RelativeDocsPath { field: &'static str, path: String },

    #[error("{field} '{path}' must not live under the {prefix} prefix")]
    DocsPathUnderApi {
        field: &'static str,
        path: String,
        prefix: &'static str,
    },

    #[error("docs.ui_path and docs.spec_path must differ")]
    DocsPathsCollide,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
            if url.query().is_some() {
                errors.push(ValidationError::BaseUrlHasQuery);
            }
        }
        Err(_) => errors.push(ValidationError::InvalidBaseUrl(
            config.upstream.base_url.clone(),
        )),
    }

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    for (field, path) in [
        ("docs.ui_path", &config.docs.ui_path),
        ("docs.spec_path", &config.docs.spec_path),
    ] {
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativeDocsPath {
                field,
                path: path.clone(),
            });
        } else if path == API_PREFIX || path.starts_with(&format!("{API_PREFIX}/")) {
            errors.push(ValidationError::DocsPathUnderApi {
                field,
                path: path.clone(),
                prefix: API_PREFIX,
            });
        }
    }

    if config.docs.ui_path == config.docs.spec_path {
        errors.push(ValidationError::DocsPathsCollide);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
