//! League Dashboard Service Library
//!
//! Loads a league snapshot, runs the power ranking engine and assembles the
//! serializable report the dashboard renders.

use anyhow::{Context, Result};
use std::path::Path;

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod service;

pub use config::{ConfigOverrides, ServiceConfig};
pub use error::ServiceError;
pub use logging::{initialize_logging, initialize_logging_with_config};
pub use report::{DashboardReport, Pairing};
pub use service::DashboardService;

/// Load configuration from an optional TOML file, the environment and CLI overrides
pub fn load_configuration(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ServiceConfig> {
    config::load_config(path, overrides).context("Failed to load service configuration")
}
