mod gate;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bunner_origin_gate_rs=debug,info")),
        )
        .init();

    let layer = gate::build_layer().expect("valid origin gate configuration");

    let app = Router::new()
        .route("/profile", get(routes::profile))
        .route("/profile", post(routes::update_profile))
        .layer(layer);

    let addr: SocketAddr = "127.0.0.1:5002".parse().unwrap();
    tracing::info!(%addr, "axum origin gate example running");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
