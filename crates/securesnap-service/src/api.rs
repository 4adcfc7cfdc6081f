//! Application endpoints (JSON).
//!
//! Every handler counts its request under the endpoint's label before
//! composing the response body.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use securesnap_core::metrics::expo;

use crate::app_state::AppState;

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    state.requests().increment("root");
    Json(json!({ "message": "Hello, SECURESNAP DevSecOps!" }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    state.requests().increment("health");
    Json(json!({ "status": "healthy" }))
}

pub async fn info(State(state): State<AppState>) -> impl IntoResponse {
    state.requests().increment("info");
    Json(json!({
        "service": "SECURESNAP",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Environment introspection for debugging deployments.
pub async fn debug(State(state): State<AppState>) -> impl IntoResponse {
    state.requests().increment("debug");
    let env: BTreeMap<String, String> = std::env::vars().collect();
    Json(json!({
        "pid": std::process::id(),
        "env": env,
    }))
}

/// `/metrics` on the application listener. Scrapes through here count
/// themselves under the `metrics` label; the dedicated listener does not.
pub async fn metrics(State(state): State<AppState>) -> Response {
    state.requests().increment("metrics");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, expo::CONTENT_TYPE)],
        state.exporter().render(),
    )
        .into_response()
}
