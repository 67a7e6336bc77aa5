//! Response mapping.
//!
//! # Responsibilities
//! - Relay a successful upstream response per the route's success rule
//! - Map local and upstream failures to the JSON error envelope
//!
//! # Design Decisions
//! - Callers always get a JSON body, even on failure
//! - Upstream rejections and unreachable upstreams collapse to the same
//!   fixed status per route

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use thiserror::Error;

use crate::http::payload::{ErrorResponse, LoginResponse};
use crate::routing::{FailureRule, ForwardRoute, SuccessRule};
use crate::upstream::UpstreamResponse;

/// Message returned when login credentials are incomplete.
pub const MISSING_CREDENTIALS: &str = "Username and password are required";

/// Failure of a single gateway request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login request without both username and password.
    #[error("Username and password are required")]
    MissingCredentials,

    /// The forwarding call failed.
    #[error("{message}")]
    Upstream {
        failure: FailureRule,
        message: String,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredentials => StatusCode::BAD_REQUEST,
            ApiError::Upstream { failure, .. } => failure.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::MissingCredentials => ErrorResponse {
                error: MISSING_CREDENTIALS.to_string(),
                details: None,
            },
            ApiError::Upstream {
                failure: FailureRule::Unauthorized,
                message,
            } => ErrorResponse {
                error: message.clone(),
                details: Some(message),
            },
            ApiError::Upstream {
                failure: FailureRule::Internal,
                message,
            } => ErrorResponse {
                error: message,
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Turn a successful upstream response into the outbound response.
pub fn relay(route: &ForwardRoute, upstream: UpstreamResponse) -> Response {
    let status = route.fixed_success_status().unwrap_or(upstream.status);
    match route.success {
        SuccessRule::Relay | SuccessRule::Created => (status, Json(upstream.body)).into_response(),
        SuccessRule::Token => {
            let token = upstream
                .body
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_owned);
            let body = LoginResponse {
                token,
                status: "success".to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::find;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let response = ApiError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Username and password are required"})
        );
    }

    #[tokio::test]
    async fn test_internal_failure_envelope() {
        let response = ApiError::Upstream {
            failure: FailureRule::Internal,
            message: "Request failed with status code 404".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Request failed with status code 404"})
        );
    }

    #[tokio::test]
    async fn test_unauthorized_failure_carries_details() {
        let response = ApiError::Upstream {
            failure: FailureRule::Unauthorized,
            message: "Request failed with status code 401".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Request failed with status code 401",
                "details": "Request failed with status code 401"
            })
        );
    }

    #[tokio::test]
    async fn test_relay_rules() {
        let upstream = UpstreamResponse {
            status: StatusCode::OK,
            body: json!({"id": 21, "title": "test product"}),
        };

        let response = relay(find("getProductById").unwrap(), upstream.clone());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, upstream.body);

        let response = relay(find("addProduct").unwrap(), upstream.clone());
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, upstream.body);
    }

    #[tokio::test]
    async fn test_token_rule() {
        let upstream = UpstreamResponse {
            status: StatusCode::CREATED,
            body: json!({"token": "abc.def.ghi"}),
        };
        let response = relay(find("login").unwrap(), upstream);
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"token": "abc.def.ghi", "status": "success"})
        );
    }

    #[tokio::test]
    async fn test_token_rule_without_token() {
        let upstream = UpstreamResponse {
            status: StatusCode::OK,
            body: Value::Null,
        };
        let response = relay(find("login").unwrap(), upstream);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "success"}));
    }
}
