//! Configuration loading and parsing
//!
//! An optional `config.toml` can carry everything the command line can:
//! the input file, the scan parameters, and the output settings. Command
//! line flags override values from the file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub input: InputConfig,
    pub scan: ScanSection,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// CSV activity log to analyze
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanSection {
    /// Number of matching records that form a complete window
    pub capacity: usize,
    /// Activity identifier to filter by
    pub activity_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Report destination (stdout when omitted)
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load and validate a configuration file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    log::info!("Loading configuration from: {:?}", path);

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;

    validate_config(&config)?;
    log::debug!("Configuration loaded successfully");
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<()> {
    if config.scan.capacity == 0 {
        bail!("scan.capacity must be positive");
    }
    if config.input.file.as_os_str().is_empty() {
        bail!("input.file must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [input]
            file = "activity.csv"

            [scan]
            capacity = 3
            activity_id = 1

            [output]
            file = "report.txt"
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.file, PathBuf::from("activity.csv"));
        assert_eq!(config.scan.capacity, 3);
        assert_eq!(config.scan.activity_id, 1);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_output_section_is_optional() {
        let toml_str = r#"
            [input]
            file = "activity.csv"

            [scan]
            capacity = 2
            activity_id = 4
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.file.is_none());
    }

    #[test]
    fn test_zero_capacity_fails_validation() {
        let toml_str = r#"
            [input]
            file = "activity.csv"

            [scan]
            capacity = 0
            activity_id = 1
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(validate_config(&config).is_err());
    }
}
