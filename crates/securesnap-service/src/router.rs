//! Axum router wiring for the application listener.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/info", get(api::info))
        .route("/debug", get(api::debug))
        .route("/metrics", get(api::metrics))
        .with_state(state)
}
