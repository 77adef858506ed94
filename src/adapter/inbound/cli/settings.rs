//! Handler for the `config` command group.

use std::path::Path;

use super::output;
use crate::config::Config;
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(config: &Config) {
    output::section("API");
    output::field("Sports", &config.api.sports_url);
    output::field("Events", &config.api.events_url);
    output::field("Event details", &config.api.event_details_url);

    output::section("HTTP");
    output::field("Timeout", format!("{} ms", config.http.timeout_ms));
    output::field(
        "Connect timeout",
        format!("{} ms", config.http.connect_timeout_ms),
    );

    output::section("Report");
    output::field("Mode", config.report.mode);
    output::field("Workers", config.report.workers);
    output::field("Events per league", config.report.events_per_league);
    if config.report.sports.is_empty() {
        output::field("Sports", "(all)");
    } else {
        output::field("Sports", config.report.sports.join(", "));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
}

/// Execute `config validate`. Unlike the other commands, a missing file is
/// an error here.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success(&format!(
        "Configuration is valid: {}",
        output::highlight(path.display())
    ));
    Ok(())
}
