//! SecureSnap service library entry.
//!
//! This crate wires the config layer, shared state, the application router,
//! and the dedicated metrics listener into a cohesive service. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
