//! Shared API plumbing: endpoint configuration, the error taxonomy, and JSON
//! request helpers. Feature code in [`crate::auth`] goes through these helpers
//! so timeouts and error mapping stay consistent.

pub mod config;
pub mod errors;
pub mod http;

pub use config::{ApiConfig, DEFAULT_TIMEOUT_SECS};
pub use errors::{AppError, GENERIC_FAILURE};
