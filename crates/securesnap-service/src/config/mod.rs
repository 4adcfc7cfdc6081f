//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use securesnap_core::error::{Result, SecureSnapError};

pub use schema::{MetricsSection, ServerSection, ServiceConfig};

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SecureSnapError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load from `path`, falling back to defaults when the file does not exist.
///
/// The service runs with a zero-config deployment in mind; only a present but
/// unreadable or invalid file is an error.
pub fn load_or_default(path: &str) -> Result<ServiceConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "no config file, using defaults");
            let cfg = ServiceConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(SecureSnapError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| SecureSnapError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
