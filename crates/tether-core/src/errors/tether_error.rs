use super::{ConfigError, StoreError};

/// Top-level error type for tether.
/// The estimator and mapper are total; only construction, config parsing
/// and store I/O produce these.
#[derive(Debug, thiserror::Error)]
pub enum TetherError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias.
pub type TetherResult<T> = Result<T, TetherError>;
