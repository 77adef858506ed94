//! Application layer - bounded orchestration and report assembly.

pub mod aggregator;
pub mod orchestrator;
pub mod service;
pub mod session;

pub use aggregator::Aggregator;
pub use orchestrator::{ExecutionMode, Orchestrator, DEFAULT_WORKERS};
pub use service::{Comparison, ReportService};
pub use session::Session;
