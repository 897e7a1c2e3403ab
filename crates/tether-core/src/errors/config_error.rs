/// Configuration precondition violations, caught at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("window_duration_days must be > 0, got {0}")]
    ZeroWindow(u32),

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}
