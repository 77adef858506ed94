use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network failure, timeout or non-success status. Never retried here.
    #[error("fetch failed for {url}: {reason}")]
    TransientFetch { url: String, reason: String },

    #[error("malformed payload from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("orchestration session already released")]
    SessionClosed,

    #[error("task panicked: {0}")]
    TaskPanicked(String),

    #[error("report mismatch: {0}")]
    Mismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a market lookup miss.
    pub fn market_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "market",
            name: name.into(),
        }
    }

    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::TransientFetch { .. })
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
