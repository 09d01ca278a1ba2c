//! # newsboard-observability
//!
//! Structured tracing setup and the log events emitted while ranking listings.

pub mod tracing_setup;

pub use tracing_setup::init_from_config;
