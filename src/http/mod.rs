//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → forward.rs (route table entry → upstream call)
//!     → response.rs (relay or JSON error envelope)
//!     → Send to client
//! ```

pub mod forward;
pub mod payload;
pub mod request;
pub mod response;
pub mod server;

pub use payload::{ErrorResponse, LoginRequest, LoginResponse};
pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::{AppState, GatewayServer, ServerError};
