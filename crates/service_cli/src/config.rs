//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use sampler_core::{SequenceKind, DEFAULT_SEED};

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "PMJGEN_SEED";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PMJGEN_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unparseable seed.
    #[error("Invalid seed: {0}. Must be an unsigned 32-bit integer")]
    InvalidSeed(String),

    /// Count outside the generator's range.
    #[error("Invalid count: {count}. Must be between 1 and {max} for {kind}")]
    InvalidCount {
        /// Requested count
        count: usize,
        /// Largest count the generator accepts
        max: usize,
        /// Generator selected
        kind: SequenceKind,
    },

    /// Unknown generator name.
    #[error("Invalid kind: {0}. Must be one of: uniform, pj, pmj")]
    InvalidKind(String),

    /// Unknown output format.
    #[error("Invalid format: {0}. Must be one of: csv, json, table")]
    InvalidFormat(String),

    /// Unknown log level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unreadable or malformed configuration file.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-stratum-rebuild detail
    Trace,
    /// Per-round progress
    Debug,
    /// Command progress
    #[default]
    Info,
    /// Recoverable problems
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Point output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `index,x,y` rows with a header
    Csv,
    /// Array of `{index, x, y}` objects
    Json,
    /// Box-drawn table
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// `pmjgen` configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PmjConfig {
    /// PRNG seed
    pub seed: u32,
    /// Number of points to generate
    pub count: usize,
    /// Generator
    #[serde(deserialize_with = "deserialize_kind")]
    pub kind: SequenceKind,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<SequenceKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    SequenceKind::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for PmjConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: 256,
            kind: SequenceKind::MultiJittered,
            format: OutputFormat::Table,
            log_level: LogLevel::Info,
        }
    }
}

impl PmjConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: PmjConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(level.trim())?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.kind.max_count();
        if self.count == 0 || self.count > max {
            return Err(ConfigError::InvalidCount {
                count: self.count,
                max,
                kind: self.kind,
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(kind) = &cli.kind {
            self.kind =
                SequenceKind::from_str(kind).map_err(|_| ConfigError::InvalidKind(kind.clone()))?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path, `None` when absent
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u32>,
    /// Count override
    pub count: Option<usize>,
    /// Kind override
    pub kind: Option<String>,
    /// Format override
    pub format: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PmjConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<PmjConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = match &cli.config_file {
        Some(path) => PmjConfig::from_file(path)?,
        None => PmjConfig::default(),
    };

    // Override with environment variables
    config.apply_env(lookup)?;

    // Override with CLI arguments
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = PmjConfig::default();
        assert_eq!(config.seed, 1);
        assert_eq!(config.count, 256);
        assert_eq!(config.kind, SequenceKind::MultiJittered);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format!("{}", OutputFormat::Csv), "csv");
        assert_eq!(format!("{}", OutputFormat::Json), "json");
        assert_eq!(format!("{}", OutputFormat::Table), "table");
    }

    #[test]
    fn test_validate_count() {
        let mut config = PmjConfig::default();
        config.count = 0;
        assert!(config.validate().is_err());

        config.count = 1 << 22;
        assert!(config.validate().is_ok());

        config.count = (1 << 22) + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pmj"));

        // PJ accepts counts beyond the PMJ limit
        config.kind = SequenceKind::Jittered;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            seed = 42
            count = 1024
            kind = "pj"
            format = "csv"
            log_level = "debug"
        "#;

        let config: PmjConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.count, 1024);
        assert_eq!(config.kind, SequenceKind::Jittered);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            count = 64
        "#;

        let config: PmjConfig = toml::from_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.count, 64);
        assert_eq!(config.seed, 1);
        assert_eq!(config.kind, SequenceKind::MultiJittered);
    }

    #[test]
    fn test_toml_rejects_unknown_kind() {
        let result: Result<PmjConfig, _> = toml::from_str(r#"kind = "sobol""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(ENV_SEED, "77"), (ENV_LOG_LEVEL, "warn")].into();
        let mut config = PmjConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.seed, 77);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_env_invalid_seed() {
        let mut config = PmjConfig::default();
        let result = config.apply_env(|key| (key == ENV_SEED).then(|| "-3".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidSeed(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = PmjConfig::default();
        let cli = CliArgs {
            seed: Some(9),
            count: Some(16),
            kind: Some("uniform".to_string()),
            format: Some("json".to_string()),
            log_level: Some("trace".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.seed, 9);
        assert_eq!(config.count, 16);
        assert_eq!(config.kind, SequenceKind::Uniform);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_cli_args_invalid_kind() {
        let mut config = PmjConfig::default();
        let cli = CliArgs {
            kind: Some("halton".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::InvalidKind(_))
        ));
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), no_env).unwrap();
        assert_eq!(config.seed, 1);
        assert_eq!(config.count, 256);
    }

    #[test]
    fn test_build_config_priority() {
        let env: HashMap<&str, &str> = [(ENV_SEED, "5")].into();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        // Environment beats defaults
        let config = build_config_with(&CliArgs::default(), lookup).unwrap();
        assert_eq!(config.seed, 5);

        // CLI beats environment
        let cli = CliArgs {
            seed: Some(6),
            ..Default::default()
        };
        let config = build_config_with(&cli, lookup).unwrap();
        assert_eq!(config.seed, 6);
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/pmjgen.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_build_config_rejects_count_above_limit() {
        let cli = CliArgs {
            count: Some(1 << 23),
            kind: Some("pmj".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env),
            Err(ConfigError::InvalidCount { .. })
        ));
    }
}
