//! Operational HTTP endpoint on the dedicated metrics listener.
//!
//! - `/metrics` : Prometheus text format

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};

use securesnap_core::metrics::expo;

use crate::app_state::AppState;

pub fn build_metrics_router(state: AppState) -> Router {
    Router::new().route("/metrics", get(metrics)).with_state(state)
}

/// Scrapes through this listener are not themselves counted.
pub async fn metrics(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, expo::CONTENT_TYPE)],
        state.exporter().render(),
    )
        .into_response()
}
