//! Helpers for tests that need a stand-in upstream API

use axum::Router;

/// Nothing listens on port 1, so connections are refused immediately
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
