//! Configuration modules.

pub mod api;
pub mod http;
pub mod logging;
pub mod report;
pub mod settings;

pub use api::ApiConfig;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use report::{ReportConfig, DEFAULT_SPORTS};
pub use settings::Config;
