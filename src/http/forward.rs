//! Generic forwarding handler.
//!
//! Every route in the table is served by [`forward`]; the entry's rules
//! decide the upstream URL, the body, and how the outcome is mapped.

use std::collections::HashMap;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::{on, MethodRouter};

use crate::http::payload::login_credentials;
use crate::http::response::{relay, ApiError};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{forwarded_query, BodyRule, ForwardRoute};
use crate::upstream::UpstreamError;

/// Build the method router serving one table entry.
pub fn method_router(route: &'static ForwardRoute) -> MethodRouter<AppState> {
    let filter = route.verb.method_filter();
    if route.param.is_some() {
        on(
            filter,
            move |State(state): State<AppState>,
                  Path(segment): Path<String>,
                  Query(query): Query<HashMap<String, String>>,
                  body: Bytes| async move {
                forward(&state, route, Some(&segment), &query, body).await
            },
        )
    } else {
        on(
            filter,
            move |State(state): State<AppState>,
                  Query(query): Query<HashMap<String, String>>,
                  body: Bytes| async move {
                forward(&state, route, None, &query, body).await
            },
        )
    }
}

/// Forward one inbound request and map the outcome.
pub async fn forward(
    state: &AppState,
    route: &'static ForwardRoute,
    segment: Option<&str>,
    query: &HashMap<String, String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let start_time = Instant::now();
    let upstream_body = upstream_body(route, body)?;

    let query = forwarded_query(route.query, query);
    let url = state
        .upstream
        .url_for(route.upstream, segment, &query)
        .map_err(|e| upstream_failure(route, &e, start_time))?;

    tracing::debug!(
        route = route.operation_id,
        method = %route.verb.method(),
        url = %url,
        "Forwarding request"
    );

    match state
        .upstream
        .send(route.verb.method(), url, upstream_body)
        .await
    {
        Ok(upstream) => {
            tracing::info!(
                route = route.operation_id,
                status = upstream.status.as_u16(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Upstream responded"
            );
            let response = relay(route, upstream);
            metrics::record_request(route.operation_id, response.status().as_u16(), start_time);
            Ok(response)
        }
        Err(e) => Err(upstream_failure(route, &e, start_time)),
    }
}

/// Decide what goes upstream as the request body.
fn upstream_body(route: &ForwardRoute, body: Bytes) -> Result<Option<Bytes>, ApiError> {
    match route.body {
        BodyRule::None => Ok(None),
        // An absent body still goes upstream as an empty JSON object.
        BodyRule::Verbatim if body.is_empty() => Ok(Some(Bytes::from_static(b"{}"))),
        BodyRule::Verbatim => Ok(Some(body)),
        BodyRule::Credentials => {
            let Some(credentials) = login_credentials(&body) else {
                tracing::debug!(route = route.operation_id, "Rejected login without credentials");
                metrics::record_rejected(route.operation_id);
                return Err(ApiError::MissingCredentials);
            };
            let forwarded = serde_json::Value::Object(credentials);
            Ok(Some(Bytes::from(forwarded.to_string())))
        }
    }
}

fn upstream_failure(
    route: &ForwardRoute,
    error: &UpstreamError,
    start_time: Instant,
) -> ApiError {
    tracing::warn!(
        route = route.operation_id,
        error = %error,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Upstream call failed"
    );
    metrics::record_upstream_failure(route.operation_id);
    metrics::record_request(route.operation_id, route.failure.status().as_u16(), start_time);
    ApiError::Upstream {
        failure: route.failure,
        message: error.to_string(),
    }
}
