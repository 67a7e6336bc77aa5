//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (loader.rs)
//!     → PORT environment variable
//!     → --port CLI flag
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → passed explicitly to GatewayServer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, PORT_ENV};
pub use schema::{
    DocsConfig, GatewayConfig, ListenerConfig, LogFormat, ObservabilityConfig, UpstreamConfig,
};
pub use validation::ValidationError;
