//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use emotion_api::config::ServiceConfig;
use emotion_api::http::HttpServer;
use emotion_api::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Config with no artificial delay, bound to an ephemeral local port.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.analysis.processing_delay_ms = 0;
    config
}

/// Start the service in the background and return its address.
///
/// The server stops when the returned `Shutdown` is triggered or dropped.
pub async fn start_server(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Client that never pools connections, so each request gets its own.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
