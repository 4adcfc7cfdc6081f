//! Shared error type across SecureSnap crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SecureSnapError>;

/// Unified error type used by core and service.
///
/// The metric path itself is infallible by contract: `increment` and `render`
/// never return an error. What remains is startup-time failure (configuration
/// and listener setup), all of which is fatal at the process level.
#[derive(Debug, Error)]
pub enum SecureSnapError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
