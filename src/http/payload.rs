//! JSON bodies the gateway itself produces or reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Credentials accepted by the login route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "mor_2314")]
    pub username: String,
    #[schema(example = "83r5^_")]
    pub password: String,
}

/// Pull `username` and `password` out of a login body.
///
/// A field is missing when absent, `null` or `""`. Present values keep
/// their JSON type; anything else in the body is dropped.
pub fn login_credentials(body: &[u8]) -> Option<Map<String, Value>> {
    let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
        return None;
    };
    let mut credentials = Map::new();
    for name in ["username", "password"] {
        let value = fields.remove(name).filter(is_present)?;
        credentials.insert(name.to_string(), value);
    }
    Some(credentials)
}

fn is_present(value: &Value) -> bool {
    !value.is_null() && value.as_str() != Some("")
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Token issued by the upstream; omitted if it sent none.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9")]
    pub token: Option<String>,
    #[schema(example = "success")]
    pub status: String,
}

/// Envelope for every failure the gateway reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_credentials_require_both_fields() {
        let full = login_credentials(br#"{"username":"johnd","password":"m38rmF$","x":1}"#);
        assert_eq!(
            full.map(Value::Object),
            Some(json!({"username": "johnd", "password": "m38rmF$"}))
        );

        for body in [
            &b""[..],
            b"not json",
            b"[1, 2]",
            br#"{"username":"johnd"}"#,
            br#"{"username":"","password":"x"}"#,
            br#"{"username":"johnd","password":null}"#,
        ] {
            assert_eq!(login_credentials(body), None);
        }
    }

    #[test]
    fn test_credentials_keep_their_json_type() {
        let credentials = login_credentials(br#"{"username":"johnd","password":123456}"#);
        assert_eq!(
            credentials.map(Value::Object),
            Some(json!({"username": "johnd", "password": 123456}))
        );
    }

    #[test]
    fn test_login_response_omits_missing_token() {
        let body = LoginResponse {
            token: None,
            status: "success".into(),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"success"}"#);
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = ErrorResponse {
            error: "boom".into(),
            details: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"boom"}"#);
    }
}
