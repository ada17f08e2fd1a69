//! syncgate - Sheet Sync Gateway
//!
//! A small HTTP gateway between the dashboard frontend and the private
//! sheet-data API. The frontend POSTs an `{office, metric}` pair; the
//! gateway forwards the fixed sheet query downstream and hands the JSON
//! answer back in a uniform envelope.
//!
//! # Modules
//!
//! - [`backend`] - HTTP client for the private sheet-data API
//! - [`config`] - YAML configuration with environment overrides
//! - [`gateway`] - Axum routes, handlers and OpenAPI docs
//! - [`logging`] - tracing setup with rolling file output

pub mod backend;
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use backend::{BackendClient, BackendError, SyncOutcome};
pub use config::AppConfig;
