//! Customer Collection Service
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ http server ──▶ customers router ──▶ CustomerStore
//!                                   │  (trace,        │ (extract,           (RwLock<Vec>)
//!                                   │   request id,   │  handlers,
//!                                   │   timeout,      │  error mapping)
//!                                   │   body limit)   │
//!                                   └──▶ static assets (every other path)
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use customer_service::config::{load_config, ServiceConfig};
use customer_service::http::HttpServer;
use customer_service::lifecycle::{signals, Shutdown};
use customer_service::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "customer-service")]
#[command(about = "REST API over an in-memory customer collection", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!("customer-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        static_dir = %config.static_files.dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Failing to bind is fatal
    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(address = %config.listener.bind_address, error = %e, "Failed to bind listener");
            return Err(e.into());
        }
    };
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
