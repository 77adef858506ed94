//! Handler for the `market` command.

use std::sync::Arc;

use super::command::MarketArgs;
use super::output;
use crate::adapter::outbound::http::HttpDataSource;
use crate::app::ReportService;
use crate::config::Config;
use crate::domain::EventId;
use crate::error::Result;

/// Execute `market`.
pub async fn execute(config: &Config, args: &MarketArgs) -> Result<()> {
    let source = HttpDataSource::from_config(&config.api, &config.http);
    let service = ReportService::new(Arc::new(source), config.report.clone());

    let market = service
        .find_market(EventId::new(args.event_id), &args.name)
        .await?;

    output::section(&market.name);
    for runner in &market.runners {
        output::field(&runner.name, format!("{} ({})", runner.price, runner.id));
    }
    Ok(())
}
