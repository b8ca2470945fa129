//! CLI configuration from arguments and environment variables.
//!
//! Every option can be given as a flag or through its environment variable.
//! Values are validated up front so a bad setting fails before any file is
//! touched.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log format '{0}'. Valid options: text, json")]
    InvalidLogFormat(String),

    #[error("Invalid log filter '{filter}': {message}")]
    InvalidLogFilter { filter: String, message: String },

    #[error("Issues file not found: {0}")]
    IssuesFileNotFound(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Log filter directive (e.g. "warn,xavyo_claim_remapping=debug")
    #[arg(long, global = true, env = "CLAIM_REMAP_LOG", default_value = "warn")]
    pub log: String,

    /// Log output format: text or json
    #[arg(long, global = true, env = "CLAIM_REMAP_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// JSON file with validation issues for the remapping list
    #[arg(long, global = true, env = "CLAIM_REMAP_ISSUES")]
    pub issues: Option<PathBuf>,
}

/// Validated CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
    pub issues_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_format: LogFormat::Text,
            issues_path: None,
        }
    }
}

impl CliConfig {
    /// Validate global arguments into a configuration.
    pub fn from_args(args: &GlobalArgs) -> Result<Self, ConfigError> {
        let log_format = args.log_format.parse()?;

        let log_filter = args.log.trim().to_string();
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&log_filter) {
            return Err(ConfigError::InvalidLogFilter {
                filter: log_filter,
                message: e.to_string(),
            });
        }

        if let Some(path) = &args.issues {
            if !path.exists() {
                return Err(ConfigError::IssuesFileNotFound(path.display().to_string()));
            }
        }

        Ok(Self {
            log_filter,
            log_format,
            issues_path: args.issues.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(log: &str, log_format: &str, issues: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            log: log.to_string(),
            log_format: log_format.to_string(),
            issues,
        }
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Text ".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!(
            "xml".parse::<LogFormat>(),
            Err(ConfigError::InvalidLogFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_from_args_defaults() {
        let config = CliConfig::from_args(&args("warn", "text", None)).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_from_args_rejects_bad_format() {
        let result = CliConfig::from_args(&args("info", "yaml", None));
        assert!(matches!(result, Err(ConfigError::InvalidLogFormat(_))));
    }

    #[test]
    fn test_from_args_rejects_missing_issues_file() {
        let result = CliConfig::from_args(&args(
            "info",
            "json",
            Some(PathBuf::from("/nonexistent/issues.json")),
        ));
        assert!(matches!(result, Err(ConfigError::IssuesFileNotFound(_))));
    }
}
