//! Report entry point.
//!
//! [`ReportService`] opens one [`Session`] per call, wires an [`Aggregator`]
//! to it and releases the session on return, whatever the outcome.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, info_span, warn, Instrument};

use super::aggregator::Aggregator;
use super::orchestrator::ExecutionMode;
use super::session::Session;
use crate::config::ReportConfig;
use crate::domain::{EventId, Market, Report};
use crate::error::{Error, Result};
use crate::port::DataSource;

/// Outcome of building the same report in both modes.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub report: Report,
    pub sequential: Duration,
    pub concurrent: Duration,
}

pub struct ReportService {
    source: Arc<dyn DataSource>,
    settings: ReportConfig,
}

impl ReportService {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>, settings: ReportConfig) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &ReportConfig {
        &self.settings
    }

    /// Build a report in the configured mode.
    pub async fn generate(&self, selected_sports: &[String]) -> Result<Report> {
        self.generate_with(self.settings.mode, selected_sports)
            .await
            .map(|(report, _)| report)
    }

    /// Build a report in `mode`, returning it with the wall time it took.
    ///
    /// Settings are validated first; a zero worker budget is a
    /// [`ConfigError::InvalidValue`](crate::error::ConfigError::InvalidValue).
    pub async fn generate_with(
        &self,
        mode: ExecutionMode,
        selected_sports: &[String],
    ) -> Result<(Report, Duration)> {
        self.settings.validate()?;
        let session = Session::open(mode, self.settings.workers);
        let aggregator = Aggregator::new(
            Arc::clone(&self.source),
            Arc::clone(session.orchestrator()),
        )
        .with_events_per_league(self.settings.events_per_league);

        let span = info_span!("report", session_id = %session.id(), mode = %mode);
        let started = Instant::now();
        let result = aggregator
            .build_report(selected_sports)
            .instrument(span)
            .await;
        let elapsed = started.elapsed();
        session.close();

        match &result {
            Ok(report) => info!(
                mode = %mode,
                sports = report.sports.len(),
                events = report.event_count(),
                elapsed_ms = millis(elapsed),
                "Report built"
            ),
            Err(err) => warn!(
                mode = %mode,
                error = %err,
                elapsed_ms = millis(elapsed),
                "Report build failed"
            ),
        }

        result.map(|report| (report, elapsed))
    }

    /// Look up one market of one event by name.
    pub async fn find_market(&self, event_id: EventId, name: &str) -> Result<Market> {
        let session = Session::open(ExecutionMode::Sequential, 1);
        let aggregator = Aggregator::new(
            Arc::clone(&self.source),
            Arc::clone(session.orchestrator()),
        );
        aggregator.find_market(event_id, name).await
    }

    /// Build the report sequentially and concurrently and check that both
    /// trees are identical.
    pub async fn compare(&self, selected_sports: &[String]) -> Result<Comparison> {
        let (sequential_report, sequential) = self
            .generate_with(ExecutionMode::Sequential, selected_sports)
            .await?;
        let (concurrent_report, concurrent) = self
            .generate_with(ExecutionMode::Concurrent, selected_sports)
            .await?;

        if sequential_report != concurrent_report {
            return Err(Error::Mismatch(
                "sequential and concurrent builds produced different trees".into(),
            ));
        }

        info!(
            sequential_ms = millis(sequential),
            concurrent_ms = millis(concurrent),
            "Build modes agree"
        );

        Ok(Comparison {
            report: concurrent_report,
            sequential,
            concurrent,
        })
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::testkit::fixtures;
    use crate::testkit::source::MockDataSource;

    fn service(source: MockDataSource) -> ReportService {
        ReportService::new(Arc::new(source), ReportConfig::default())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn compare_reports_agreement() {
        let service = service(MockDataSource::new(fixtures::catalog()));
        let comparison = service.compare(&[]).await.unwrap();

        assert_eq!(comparison.report.sports.len(), 2);
    }

    #[tokio::test]
    async fn failed_build_returns_no_report() {
        let source = MockDataSource::new(fixtures::catalog()).fail_event_detail(102);
        let service = service(source);

        let result = service.generate(&[]).await;
        assert!(matches!(result, Err(Error::TransientFetch { .. })));
    }

    #[tokio::test]
    async fn zero_workers_is_a_config_error() {
        let settings = ReportConfig {
            workers: 0,
            ..ReportConfig::default()
        };
        let service = ReportService::new(
            Arc::new(MockDataSource::new(fixtures::catalog())),
            settings,
        );

        let err = service.generate(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "workers", .. })
        ));
    }

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1_500)), 1_500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn find_market_reports_missing_market() {
        let service = service(MockDataSource::new(fixtures::catalog()));

        let err = service
            .find_market(EventId::new(101), "Nonexistent")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "market not found: Nonexistent");
    }
}
