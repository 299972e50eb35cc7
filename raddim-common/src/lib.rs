//! Common types and utilities for raddim
//!
//! This crate provides shared types, configuration structures, and utilities
//! used across the raddim crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{MapConfig, RaddimConfig, ServiceConfig};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
pub use types::GeoPoint;
