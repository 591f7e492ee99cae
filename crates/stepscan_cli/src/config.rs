//! CLI configuration management.
//!
//! Handles loading configuration from a TOML file with environment variable
//! override support. Command line flags are applied last by the caller.
//!
//! ```toml
//! log_level = "info"
//! format = "table"
//!
//! [scan]
//! start = 0.0
//! step = 0.1
//! range = 10.0
//! display_min = -10.0
//! display_max = 10.0
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use stepscan_core::workflow::ScanSettings;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid environment variable value
    #[error("Environment variable {name}: {message}")]
    Env {
        /// Variable name
        name: &'static str,
        /// What was wrong
        message: String,
    },

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// How a frame is handed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Status line and point tables on stdout
    #[default]
    Table,
    /// Chart.js-compatible JSON on stdout
    Json,
    /// Interactive terminal chart
    Tui,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "tui" => Ok(OutputFormat::Tui),
            other => Err(format!(
                "Unknown format: {}. Supported: table, json, tui",
                other
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Tui => write!(f, "tui"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Scan and display parameters
    #[serde(default)]
    pub scan: ScanSettings,
}

/// Scan parameters from command line flags; these take precedence over
/// the file and the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanOverrides {
    /// First abscissa of the scan
    pub start: Option<f64>,
    /// Distance between samples
    pub step: Option<f64>,
    /// Length of the scanned interval
    pub range: Option<f64>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            scan: ScanSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("STEPSCAN_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("STEPSCAN_FORMAT") {
            self.format = format.parse().map_err(|message| ConfigError::Env {
                name: "STEPSCAN_FORMAT",
                message,
            })?;
        }

        if let Some(start) = lookup("STEPSCAN_START") {
            self.scan.start = parse_number("STEPSCAN_START", &start)?;
        }

        if let Some(step) = lookup("STEPSCAN_STEP") {
            self.scan.step = parse_number("STEPSCAN_STEP", &step)?;
        }

        if let Some(range) = lookup("STEPSCAN_RANGE") {
            self.scan.range = parse_number("STEPSCAN_RANGE", &range)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        errors.extend(self.scan.problems().iter().map(|p| format!("scan: {}", p)));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Replace scan parameters given on the command line
    pub fn with_scan_overrides(mut self, overrides: &ScanOverrides) -> Self {
        if let Some(start) = overrides.start {
            self.scan.start = start;
        }
        if let Some(step) = overrides.step {
            self.scan.step = step;
        }
        if let Some(range) = overrides.range {
            self.scan.range = range;
        }
        self
    }

    /// Load with defaults fallback, apply environment and command line
    /// overrides, and validate the result
    pub fn load_with_env_and_validate(
        path: &Path,
        overrides: &ScanOverrides,
    ) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?
            .with_env_override()?
            .with_scan_overrides(overrides);
        config.validate()?;
        Ok(config)
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        name,
        message: format!("'{}' is not a number", value),
    })
}
