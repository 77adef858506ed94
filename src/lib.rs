//! Betline report - concurrent top-league market reports for a sportsbook.
//!
//! Fetches the sports catalog of a betline API, keeps each sport's top
//! leagues, the nearest pre-match events of each league, and every market of
//! those events, and assembles the result into one ordered report tree.
//!
//! # Architecture
//!
//! - **`app::Orchestrator`** - Bounded fan-out. At most N fetches are in
//!   flight across every level of the tree; the first failure cancels the
//!   whole build.
//! - **`app::Aggregator`** - Builds Sport → League → Event → Market → Runner
//!   recursively, one fan-out per level.
//! - **`app::Session`** - Owns the orchestrator of one build and releases it
//!   on every exit path.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Catalog types, the report tree, and selection rules
//! - [`port`] - Data source and presenter traits
//! - [`adapter`] - HTTP data source, presenters, and the CLI
//! - [`app`] - Orchestration and report assembly
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use betline_report::adapter::outbound::http::HttpDataSource;
//! use betline_report::app::ReportService;
//! use betline_report::config::Config;
//!
//! # async fn run() -> betline_report::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let source = HttpDataSource::from_config(&config.api, &config.http);
//! let service = ReportService::new(Arc::new(source), config.report.clone());
//! let report = service.generate(&["Football".to_string()]).await?;
//! println!("{} events", report.event_count());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
