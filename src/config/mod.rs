//! Configuration module for canvas-export.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ApiConfig, Config, ExportConfig};
pub use validation::validate_config;
