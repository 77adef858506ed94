//! Report build settings.

use serde::Deserialize;

use crate::app::{ExecutionMode, DEFAULT_WORKERS};
use crate::domain::selector::DEFAULT_EVENTS_PER_LEAGUE;
use crate::error::{ConfigError, Result};

/// Sports requested when neither the config nor the command line names any.
pub const DEFAULT_SPORTS: [&str; 4] = ["Football", "Tennis", "Ice Hockey", "Basketball"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Worker budget shared by every level of one build.
    pub workers: usize,
    /// Nearest pre-match events kept per league.
    pub events_per_league: usize,
    pub mode: ExecutionMode,
    /// Sport names to include. Empty means every sport.
    pub sports: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            events_per_league: DEFAULT_EVENTS_PER_LEAGUE,
            mode: ExecutionMode::default(),
            sports: DEFAULT_SPORTS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ReportConfig {
    /// Reject settings a build cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.events_per_league == 0 {
            return Err(ConfigError::InvalidValue {
                field: "events_per_league",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_are_valid() {
        assert!(ReportConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_events_per_league_is_rejected() {
        let config = ReportConfig {
            events_per_league: 0,
            ..ReportConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "events_per_league",
                ..
            })
        ));
    }
}
