//! End-to-end tests over the application and ops routers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use securesnap_service::{app_state::AppState, config::ServiceConfig, ops, router};

fn state() -> AppState {
    AppState::new(ServiceConfig::default())
}

async fn get(router: &Router, path: &str) -> (StatusCode, Option<String>, String) {
    let res = router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_greets() {
    let app = router::build_router(state());
    let (status, _, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Hello, SECURESNAP DevSecOps!");
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = router::build_router(state());
    let (status, _, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn info_names_the_service() {
    let app = router::build_router(state());
    let (status, _, body) = get(&app, "/info").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["service"], "SECURESNAP");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn debug_reports_process_environment() {
    let app = router::build_router(state());
    let (status, _, body) = get(&app, "/debug").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["pid"].is_u64());
    assert!(json["env"].is_object());
}

#[tokio::test]
async fn app_metrics_scrape_counts_itself() {
    let app = router::build_router(state());

    let (status, content_type, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("text/plain; version=0.0.4; charset=utf-8")
    );
    assert!(body.contains("app_requests_total{endpoint=\"metrics\"} 1"));

    let (_, _, body) = get(&app, "/metrics").await;
    assert!(body.contains("app_requests_total{endpoint=\"metrics\"} 2"));
}

#[tokio::test]
async fn ops_scrape_on_fresh_state_is_header_only() {
    let exporter = ops::build_metrics_router(state());

    let (status, content_type, body) = get(&exporter, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("text/plain; version=0.0.4; charset=utf-8")
    );
    assert_eq!(
        body.lines().collect::<Vec<_>>(),
        vec![
            "# HELP app_requests_total Total number of requests",
            "# TYPE app_requests_total counter",
        ]
    );
}

#[tokio::test]
async fn endpoints_count_under_their_own_labels() {
    let state = state();
    let app = router::build_router(state.clone());
    let exporter = ops::build_metrics_router(state);

    for _ in 0..3 {
        get(&app, "/").await;
    }
    for _ in 0..2 {
        get(&app, "/health").await;
    }

    let (_, _, body) = get(&exporter, "/metrics").await;
    assert!(body.contains("app_requests_total{endpoint=\"root\"} 3"));
    assert!(body.contains("app_requests_total{endpoint=\"health\"} 2"));

    // The dedicated listener never counts its own scrapes.
    let (_, _, body) = get(&exporter, "/metrics").await;
    assert!(!body.contains("endpoint=\"metrics\""));
}
