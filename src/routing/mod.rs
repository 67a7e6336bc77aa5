//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! ROUTES (table.rs, static)
//!     → http::forward mounts each entry under API_PREFIX
//!     → docs::openapi describes each entry
//!
//! Inbound request (method, path, query)
//!     → axum matches {method, path template} to one entry
//!     → query.rs selects the allowlisted query parameters
//!     → upstream client issues the forwarding call
//! ```
//!
//! # Design Decisions
//! - Routes are declared once, immutable at runtime
//! - Templates are non-overlapping per method, so order does not matter
//! - At most one dynamic segment per template

pub mod query;
pub mod table;

pub use query::forwarded_query;
pub use table::{
    find, BodyRule, FailureRule, ForwardRoute, ParamKind, PathParam, Payload, QueryParam,
    QueryRule, Resource, RouteDoc, SuccessRule, Verb, ROUTES,
};

/// Prefix every forwarded route is mounted under.
pub const API_PREFIX: &str = "/api";
