//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;
use customer_service::config::ServiceConfig;
use customer_service::customers::CustomerStore;
use customer_service::http::HttpServer;
use customer_service::lifecycle::Shutdown;

/// A running service plus the handles a test needs to inspect and stop it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: CustomerStore,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service on an ephemeral loopback port over the seed collection.
pub async fn start_server() -> TestServer {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.static_files.enabled = false;

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let store = CustomerStore::seeded();
    let server = HttpServer::with_store(config, store.clone());
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    TestServer { addr, store, shutdown }
}

/// Client without connection pooling, so shutdown never waits on idle sockets.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
