//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the customer API
//! - Serve static assets for every path the API does not claim
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener and stop on shutdown signal

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::customers::{customer_router, CustomerStore};
use crate::http::request::{request_id, UuidRequestId};

/// HTTP server for the customer API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: CustomerStore,
}

impl HttpServer {
    /// Create a server over the seeded customer collection.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, CustomerStore::seeded())
    }

    /// Create a server over an existing store.
    pub fn with_store(config: ServiceConfig, store: CustomerStore) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServiceConfig, store: CustomerStore) -> Router {
        let mut router = customer_router(store);

        if config.static_files.enabled {
            router = router.fallback_service(ServeDir::new(&config.static_files.dir));
        }

        router
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server until a shutdown message arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let customers = self.store.len().await;
        tracing::info!(
            address = %addr,
            customers,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get a handle to the customer store.
    pub fn store(&self) -> &CustomerStore {
        &self.store
    }
}
