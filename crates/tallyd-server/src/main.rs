//! tallyd — in-memory metrics-ingestion endpoint.
//!
//! - Update endpoint: POST /update/{kind}/{name}/{value}
//! - Counter deltas accumulate, gauge values overwrite
//! - State lives in memory for the process lifetime

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use tallyd_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("tallyd.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "tallyd starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
