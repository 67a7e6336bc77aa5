//! Storefront API Gateway
//!
//! A pass-through gateway built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ──▶ route table ──▶ forward    │
//!                           │   (request id,    (ROUTES,        (query,    │
//!                           │    tracing)        /api/*)         body)     │
//!                           │                                      │       │
//!                           │                                      ▼       │
//!     Client Response       │                               upstream client┼──▶ Upstream
//!     ◀─────────────────────┼── relay / error envelope ◀───────────┘       │    REST API
//!                           │                                              │
//!                           │   docs: OpenAPI JSON + Swagger UI            │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use storefront_gateway::config::{resolve_config, PORT_ENV};
use storefront_gateway::lifecycle::{wait_for_signal, Shutdown};
use storefront_gateway::observability::{logging, metrics};
use storefront_gateway::GatewayServer;

#[derive(Parser)]
#[command(name = "storefront-gateway")]
#[command(about = "Pass-through HTTP gateway for the FakeStore API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env_port = std::env::var(PORT_ENV).ok();
    let config = resolve_config(cli.config.as_deref(), env_port.as_deref(), cli.port)?;

    logging::init(&config.observability)?;

    tracing::info!("storefront-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.socket_address(),
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.socket_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        docs = %format!("http://localhost:{}{}", local_addr.port(), config.docs.ui_path),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = GatewayServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
