//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Hold the fixed upstream base URL
//! - Build forwarding URLs (path segments + query string)
//! - Issue exactly one HTTP call per forwarding request
//! - Decode the upstream JSON body, or report why the call failed
//!
//! # Design Decisions
//! - One shared `reqwest::Client`; its connection pool is left at defaults
//! - No retries, no timeouts, no circuit breaking
//! - Non-2xx responses are failures, like any transport error

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// A successful upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Client for the single upstream REST service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: Url,
}

impl UpstreamClient {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|_| UpstreamError::InvalidBase(config.base_url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(UpstreamError::InvalidBase(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(UpstreamError::Transport)?;

        tracing::debug!(base_url = %base, "Upstream client initialized");
        Ok(Self { http, base })
    }

    /// Build the URL for `path`, an optional trailing path segment and the
    /// already-ordered query pairs.
    pub fn url_for(
        &self,
        path: &str,
        segment: Option<&str>,
        query: &[(&str, &str)],
    ) -> UpstreamResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| UpstreamError::InvalidBase(self.base.to_string()))?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|part| !part.is_empty()));
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }

        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue one call and decode the response.
    ///
    /// A body, when given, is sent as `application/json`.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
    ) -> UpstreamResult<UpstreamResponse> {
        let mut request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(UpstreamError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { status });
        }

        let bytes = response.bytes().await.map_err(UpstreamError::Body)?;
        Ok(UpstreamResponse {
            status,
            body: decode_body(&bytes),
        })
    }
}

/// Empty bodies decode to `null`; bodies that are not JSON are kept as a
/// JSON string.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
