//! Request identification.
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing (outermost layer)
//! - Client-supplied IDs are kept; otherwise a UUID v4 is generated
//! - The ID is echoed back on the response

use axum::http::HeaderName;

/// Header carrying the request ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
