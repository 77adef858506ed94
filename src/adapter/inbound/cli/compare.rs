//! Handler for the `compare` command.

use std::sync::Arc;

use super::command::CompareArgs;
use super::output;
use super::report::selection;
use crate::adapter::outbound::http::HttpDataSource;
use crate::app::ReportService;
use crate::config::Config;
use crate::error::Result;

/// Execute `compare`.
pub async fn execute(config: &Config, args: &CompareArgs) -> Result<()> {
    let selection = selection(&config.report, &args.sports, args.all);
    let source = HttpDataSource::from_config(&config.api, &config.http);
    let service = ReportService::new(Arc::new(source), config.report.clone());

    let comparison = service.compare(&selection).await?;

    output::section("Build Modes");
    output::field("Sequential", format!("{} ms", comparison.sequential.as_millis()));
    output::field(
        format!("Concurrent ({})", config.report.workers).as_str(),
        format!("{} ms", comparison.concurrent.as_millis()),
    );
    output::field("Events", comparison.report.event_count());
    output::success("Both modes produced the same report");
    Ok(())
}
