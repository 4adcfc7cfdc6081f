use std::net::SocketAddr;

use securesnap_core::error::{Result, SecureSnapError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SecureSnapError::UnsupportedVersion);
        }

        let server = parse_listen("server.listen", &self.server.listen)?;
        let metrics = parse_listen("metrics.listen", &self.metrics.listen)?;
        if server.port() == metrics.port() {
            return Err(SecureSnapError::InvalidConfig(
                "server.listen and metrics.listen must not share a port".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_server_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_server_listen(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_metrics_listen")]
    pub listen: String,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            listen: default_metrics_listen(),
        }
    }
}

fn default_server_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_metrics_listen() -> String {
    "0.0.0.0:8001".into()
}

fn parse_listen(field: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .map_err(|_| SecureSnapError::InvalidConfig(format!("{field} must be a valid socket address")))
}
