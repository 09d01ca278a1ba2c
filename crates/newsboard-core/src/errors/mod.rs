mod config_error;

pub use config_error::ConfigError;

/// Top-level error for every fallible Newsboard operation.
///
/// Ranking itself never fails; errors come from loading configuration or
/// decoding item snapshots handed over by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum NewsboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type NewsboardResult<T> = Result<T, NewsboardError>;
