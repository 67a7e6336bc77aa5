//! API documentation surface.
//!
//! # Data Flow
//! ```text
//! schemas.rs (ToSchema types) + ROUTES
//!     → openapi.rs (ApiDoc, assembled once at startup)
//!     → router(): JSON at docs.spec_path, Swagger UI at docs.ui_path
//! ```
//!
//! The document is read-only; nothing at runtime mutates it.

pub mod openapi;
pub mod schemas;

use axum::Router;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::DocsConfig;

pub use openapi::{openapi, ApiDoc};

/// Build the documentation router.
pub fn router<S>(config: &DocsConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let doc = openapi(config);
    tracing::debug!(
        ui_path = %config.ui_path,
        spec_path = %config.spec_path,
        paths = doc.paths.paths.len(),
        "API documentation assembled"
    );
    Router::new().merge(SwaggerUi::new(config.ui_path.clone()).url(config.spec_path.clone(), doc))
}
