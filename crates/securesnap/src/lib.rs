//! Top-level facade crate for SecureSnap.
//!
//! Re-exports core types and the service library so users can depend on a single crate.

pub mod core {
    pub use securesnap_core::*;
}

pub mod service {
    pub use securesnap_service::*;
}
