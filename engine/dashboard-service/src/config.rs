//! Service configuration management
//!
//! Layers, later wins: built-in defaults, the TOML file, `DASHBOARD_*`
//! environment variables (a `.env` file is honoured), then CLI overrides.

use anyhow::{Context, Result};
use power_rankings::RankingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Where league records are read from
    pub source: SourceConfig,

    /// Ranking engine and analytics constants
    pub rankings: RankingConfig,

    pub logging: LoggingConfig,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// League snapshot directory (league.json, users.json, matchups/<week>.json, ...)
    pub snapshot_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report destination; stdout when unset
    pub path: Option<PathBuf>,

    /// Pretty-print the report JSON
    pub pretty: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { snapshot_dir: PathBuf::from("./data/league") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: None, pretty: true }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub snapshot_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
    pub compact: bool,
}

/// Load, layer and validate the configuration
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ServiceConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from file: {:?}", path);
            load_from_file(path)?
        }
        None => ServiceConfig::default(),
    };

    // A missing .env file is fine
    dotenv::dotenv().ok();
    apply_env(&mut config, |key| std::env::var(key).ok())?;

    apply_overrides(&mut config, overrides);

    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file; missing sections take their defaults
pub fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Apply `DASHBOARD_*` variables from `lookup`
pub fn apply_env<F>(config: &mut ServiceConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("DASHBOARD_SNAPSHOT_DIR") {
        config.source.snapshot_dir = PathBuf::from(dir);
    }

    if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = lookup("DASHBOARD_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Some(output) = lookup("DASHBOARD_OUTPUT") {
        config.output.path = Some(PathBuf::from(output));
    }

    if let Some(weeks) = lookup("DASHBOARD_SCHEDULE_WEEKS") {
        config.rankings.schedule_weeks = weeks
            .parse()
            .with_context(|| format!("Invalid DASHBOARD_SCHEDULE_WEEKS: {weeks}"))?;
    }

    if let Some(points) = lookup("DASHBOARD_HIGHLIGHT_MIN_POINTS") {
        config.rankings.highlight_min_points = points
            .parse()
            .with_context(|| format!("Invalid DASHBOARD_HIGHLIGHT_MIN_POINTS: {points}"))?;
    }

    Ok(())
}

pub fn apply_overrides(config: &mut ServiceConfig, overrides: &ConfigOverrides) {
    if let Some(dir) = &overrides.snapshot_dir {
        config.source.snapshot_dir = dir.clone();
    }
    if let Some(output) = &overrides.output {
        config.output.path = Some(output.clone());
    }
    if let Some(level) = &overrides.log_level {
        config.logging.level = level.clone();
    }
    if overrides.compact {
        config.output.pretty = false;
    }
}

/// Validate configuration
pub fn validate_config(config: &ServiceConfig) -> Result<()> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" | "compact" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    config.rankings.validate().context("Invalid ranking configuration")?;

    if !config.source.snapshot_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Snapshot directory not found: {:?}",
            config.source.snapshot_dir
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_in(dir: &Path) -> ServiceConfig {
        ServiceConfig {
            source: SourceConfig { snapshot_dir: dir.to_path_buf() },
            ..Default::default()
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(
            &path,
            r#"
            [rankings]
            highlight_count = 5

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.rankings.highlight_count, 5);
        assert_eq!(config.rankings.schedule_weeks, 18);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DASHBOARD_LOG_LEVEL", "debug"),
            ("DASHBOARD_SCHEDULE_WEEKS", "17"),
            ("DASHBOARD_OUTPUT", "report.json"),
        ]);
        let mut config = ServiceConfig::default();
        apply_env(&mut config, |key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.rankings.schedule_weeks, 17);
        assert_eq!(config.output.path, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_bad_env_number_rejected() {
        let mut config = ServiceConfig::default();
        let result = apply_env(&mut config, |key| {
            (key == "DASHBOARD_SCHEDULE_WEEKS").then(|| "eighteen".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = ServiceConfig::default();
        let overrides = ConfigOverrides {
            snapshot_dir: Some(PathBuf::from("/tmp/league")),
            output: None,
            log_level: Some("warn".to_string()),
            compact: true,
        };
        apply_overrides(&mut config, &overrides);

        assert_eq!(config.source.snapshot_dir, PathBuf::from("/tmp/league"));
        assert_eq!(config.logging.level, "warn");
        assert!(!config.output.pretty);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_validation() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config(&config_in(dir.path())).is_ok());

        let mut config = config_in(dir.path());
        config.logging.level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = config_in(dir.path());
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = config_in(dir.path());
        config.rankings.schedule_weeks = 0;
        assert!(validate_config(&config).is_err());

        assert!(validate_config(&config_in(&dir.path().join("missing"))).is_err());
    }
}
