//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every section is optional and falls back to its defaults, so
//! an empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use betline_report::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::api::ApiConfig;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::report::ReportConfig;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint templates of the betline API.
    pub api: ApiConfig,
    /// HTTP client timeouts.
    pub http: HttpConfig,
    /// Worker budget, event limit, mode and sport selection.
    pub report: ReportConfig,
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if it exists, otherwise use validated defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.report.validate()?;

        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ExecutionMode;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.report.workers, 3);
        assert_eq!(config.report.events_per_league, 2);
        assert_eq!(config.report.mode, ExecutionMode::Concurrent);
        assert_eq!(config.report.sports.len(), 4);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
[api]
sports_url = "http://localhost:9000/sports"
events_url = "http://localhost:9000/events/{league_id}"
event_details_url = "http://localhost:9000/event/{event_id}"

[report]
workers = 8
events_per_league = 5
mode = "sequential"
sports = ["Football"]

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.report.workers, 8);
        assert_eq!(config.report.events_per_league, 5);
        assert_eq!(config.report.mode, ExecutionMode::Sequential);
        assert_eq!(config.report.sports, vec!["Football".to_string()]);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn zero_workers_is_rejected() {
        let result = Config::parse_toml("[report]\nworkers = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "workers",
                ..
            }))
        ));
    }

    #[test]
    fn zero_event_limit_is_rejected() {
        let result = Config::parse_toml("[report]\nevents_per_league = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "events_per_league",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse_toml("[report\nworkers = 1");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let result = Config::parse_toml("[report]\nmode = \"parallel\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
