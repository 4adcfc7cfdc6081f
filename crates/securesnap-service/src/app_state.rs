//! Shared application state for the SecureSnap service.
//!
//! The request counter is a single instance owned here and handed to every
//! handler through axum state; there is no module-level global.

use std::sync::Arc;

use securesnap_core::metrics::{MetricsExporter, RequestCounter};

use crate::config::ServiceConfig;

const METRIC_NAME: &str = "app_requests_total";
const METRIC_HELP: &str = "Total number of requests";
const METRIC_LABEL: &str = "endpoint";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    requests: Arc<RequestCounter>,
    exporter: MetricsExporter,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        let requests = Arc::new(RequestCounter::new(METRIC_NAME, METRIC_HELP, METRIC_LABEL));
        let exporter = MetricsExporter::new(Arc::clone(&requests));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                requests,
                exporter,
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn requests(&self) -> &RequestCounter {
        &self.inner.requests
    }

    pub fn exporter(&self) -> &MetricsExporter {
        &self.inner.exporter
    }
}
