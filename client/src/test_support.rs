//! Live gateway for client tests.

use server::routes;
use server::state::{AppState, Catalog};

/// Bind the gateway on an ephemeral loopback port and return its base URL.
pub async fn spawn_gateway(catalog: Catalog) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let app = routes::app(AppState::new(catalog));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Gateway serving the built-in fixtures.
pub async fn spawn_default_gateway() -> String {
    spawn_gateway(Catalog::fixtures()).await
}
