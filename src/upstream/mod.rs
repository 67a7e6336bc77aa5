//! Upstream client adapter.
//!
//! # Data Flow
//! ```text
//! ForwardRoute + path segment + ordered query pairs
//!     → client.rs (url_for: base URL + path + query)
//!     → client.rs (send: one HTTP call)
//!     → UpstreamResponse { status, body } | UpstreamError
//! ```

pub mod client;
pub mod error;

pub use client::{UpstreamClient, UpstreamResponse};
pub use error::{UpstreamError, UpstreamResult};
