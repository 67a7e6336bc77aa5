//! Storefront API Gateway Library
//!
//! Forwards every `/api` route to a fixed upstream REST service and relays
//! the response, publishing an OpenAPI description of the surface.

pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
