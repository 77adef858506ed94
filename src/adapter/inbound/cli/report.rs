//! Handler for the `report` command.

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use super::command::ReportArgs;
use super::output;
use crate::adapter::outbound::http::HttpDataSource;
use crate::adapter::presenter::{JsonPresenter, TextPresenter};
use crate::app::ReportService;
use crate::config::{Config, ReportConfig};
use crate::error::Result;
use crate::port::Presenter;

/// Execute `report`.
pub async fn execute(config: &Config, args: &ReportArgs) -> Result<()> {
    let settings = settings(&config.report, args)?;
    let selection = selection(&settings, &args.sports, args.all);
    let source = HttpDataSource::from_config(&config.api, &config.http);
    let service = ReportService::new(Arc::new(source), settings);

    info!(sports = ?selection, "Building report");
    let report = service.generate(&selection).await?;

    let json = output::is_json();
    let presenter: &dyn Presenter = if json {
        &JsonPresenter
    } else {
        &TextPresenter
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    presenter.present(&report, &mut out)?;
    out.flush()?;

    if report.is_empty() && !json {
        output::note("No top-league pre-match events found");
    }
    Ok(())
}

/// Configured report settings with command-line overrides applied.
pub(crate) fn settings(base: &ReportConfig, args: &ReportArgs) -> Result<ReportConfig> {
    let mut settings = base.clone();
    if let Some(mode) = args.mode {
        settings.mode = mode.into();
    }
    if let Some(workers) = args.workers {
        settings.workers = workers;
    }
    if let Some(events) = args.events {
        settings.events_per_league = events;
    }
    settings.validate()?;
    Ok(settings)
}

/// Sport names to request. An empty list selects every sport.
pub(crate) fn selection(settings: &ReportConfig, sports: &[String], all: bool) -> Vec<String> {
    if all {
        Vec::new()
    } else if !sports.is_empty() {
        sports.to_vec()
    } else {
        settings.sports.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::command::ModeArg;
    use crate::app::ExecutionMode;
    use crate::error::{ConfigError, Error};

    fn args() -> ReportArgs {
        ReportArgs {
            sports: vec![],
            all: false,
            mode: None,
            workers: None,
            events: None,
        }
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let args = ReportArgs {
            mode: Some(ModeArg::Sequential),
            workers: Some(8),
            events: Some(4),
            ..args()
        };

        let settings = settings(&ReportConfig::default(), &args).unwrap();
        assert_eq!(settings.mode, ExecutionMode::Sequential);
        assert_eq!(settings.workers, 8);
        assert_eq!(settings.events_per_league, 4);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let args = ReportArgs {
            workers: Some(0),
            ..args()
        };

        let err = settings(&ReportConfig::default(), &args).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "workers", .. })
        ));
    }

    #[test]
    fn selection_precedence() {
        let config = ReportConfig::default();

        assert_eq!(selection(&config, &[], false), config.sports);
        assert_eq!(
            selection(&config, &["Darts".to_string()], false),
            vec!["Darts".to_string()]
        );
        assert!(selection(&config, &[], true).is_empty());
    }
}
