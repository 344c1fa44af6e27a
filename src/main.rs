//! Locale Gateway (v1)
//!
//! An HTTP gateway built with Tokio and Axum that keeps every page URL of a
//! multilingual site under a locale prefix (`/ka`, `/en`, `/ru`).
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────────┐
//!                     │                    LOCALE GATEWAY                    │
//!                     │                                                      │
//!   Client Request    │  ┌──────────┐    ┌────────────┐    ┌──────────────┐  │
//!   ──────────────────┼─▶│  http    │───▶│   locale   │───▶│   routing    │  │
//!                     │  │  server  │    │ middleware │    │  classifier  │  │
//!                     │  └──────────┘    └─────┬──────┘    └──────────────┘  │
//!                     │                        │                             │
//!   307 Location      │           Redirect     │   Bypass / PassThrough      │
//!   ◀─────────────────┼────────────────────────┤                             │
//!                     │                        ▼                             │
//!   Client Response   │                 ┌────────────┐                       │
//!   ◀─────────────────┼─────────────────│  upstream  │◀──────────────────────┼── Web app
//!                     │                 │ forwarder  │                       │   (sessions,
//!                     │                 └────────────┘                       │    pages, API)
//!                     │                                                      │
//!                     │  Cross-cutting: config · observability · lifecycle   │
//!                     └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use locale_gateway::config::{load_config, GatewayConfig};
use locale_gateway::lifecycle::{wait_for_signal, Shutdown};
use locale_gateway::observability::{logging, metrics};
use locale_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "locale-gateway")]
#[command(about = "Locale-prefix enforcing gateway for a multilingual site", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("locale-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        cookie_name = %config.locales.cookie_name,
        request_timeout_secs = config.timeouts.request_secs,
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

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
