//! Shared utilities for integration tests.
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use storefront_gateway::config::GatewayConfig;
use storefront_gateway::http::GatewayServer;
use tower::ServiceExt;
use wiremock::{Match, MockServer};

/// Gateway configuration forwarding to `upstream`.
pub fn config_for(upstream: &MockServer) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = upstream.uri();
    config
}

/// Fully layered gateway router forwarding to `upstream`.
pub fn gateway(upstream: &MockServer) -> Router {
    GatewayServer::new(config_for(upstream))
        .expect("gateway builds")
        .router()
}

/// Send one request through the router.
pub async fn call(router: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };
    router
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("router is infallible")
}

/// Send one request and decode the JSON response.
pub async fn call_json(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let response = call(router, method, uri, body).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).expect("gateway always answers with JSON");
    (status, json)
}

/// Matches the raw upstream query string exactly, order included.
pub struct ExactQuery(pub Option<&'static str>);

impl Match for ExactQuery {
    fn matches(&self, request: &wiremock::Request) -> bool {
        request.url.query() == self.0
    }
}
