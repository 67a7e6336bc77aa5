//! Upstream call errors.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by a forwarding call.
///
/// The `Display` output is what callers see in the `error` field of the
/// failure envelope.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The configured base URL cannot carry path segments.
    #[error("invalid upstream base URL '{0}'")]
    InvalidBase(String),

    /// Connection, DNS or protocol failure before a response arrived.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("Request failed with status code {}", .status.as_u16())]
    Status { status: StatusCode },

    /// The response body could not be read.
    #[error("failed to read upstream response: {0}")]
    Body(#[source] reqwest::Error),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test]
    fn test_invalid_base_message() {
        let err = UpstreamError::InvalidBase("mailto:shop@example.com".into());
        assert_eq!(
            err.to_string(),
            "invalid upstream base URL 'mailto:shop@example.com'"
        );
    }
}
