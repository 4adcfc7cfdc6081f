//! SecureSnap service
//!
//! - JSON endpoints: `/`, `/health`, `/info`, `/debug`
//! - `/metrics` on the application listener, plus a dedicated exposition
//!   listener on its own port
//! - Tracing span per request handler via the fmt subscriber

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use securesnap_service::{app_state, config, ops, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("securesnap.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");
    let metrics_listen: SocketAddr = cfg
        .metrics
        .listen
        .parse()
        .expect("metrics.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state.clone());
    let exporter = ops::build_metrics_router(state);

    // Bind both up front so an unavailable port fails at startup instead of
    // inside the spawned serve task.
    let metrics_listener = tokio::net::TcpListener::bind(metrics_listen)
        .await
        .expect("failed to bind metrics listener");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    tracing::info!(%metrics_listen, "metrics exposition listening");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(metrics_listener, exporter).await {
            tracing::error!(error = %e, "metrics listener failed");
        }
    });

    tracing::info!(%listen, "securesnap-service starting");
    axum::serve(listener, app).await.expect("server failed");
}
