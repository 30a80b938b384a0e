//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use faultline::{App, HttpServer, ServerConfig};

/// Spawn an HTTP server for the given app on an ephemeral loopback port.
pub async fn spawn_server(app: App) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(app, ServerConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    addr
}

/// GET a path and return (status, body).
pub async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{}{}", addr, path))
        .send()
        .await
        .expect("Server unreachable");
    let status = res.status().as_u16();
    let body = res.text().await.unwrap();
    (status, body)
}
