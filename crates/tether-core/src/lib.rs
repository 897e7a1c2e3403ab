//! # tether-core
//!
//! Foundation crate for the tether attachment estimator and tone mapper.
//!
//! ## Modules
//! - `config`: TetherConfig, EstimatorConfig, ObservabilityConfig, validation
//! - `errors`: TetherError, ConfigError, StoreError
//! - `models`: observations, styles, UI tones, priors, rollups, confirmations
//! - `normalize`: the two-pass clamp + renormalize discipline shared by every distribution
//! - `observability`: tracing-subscriber setup
//! - `traits`: store collaborator interfaces

pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod observability;
pub mod traits;

pub use config::TetherConfig;
pub use errors::{TetherError, TetherResult};
pub use models::{
    AttachmentStyle, ConfirmedStyle, Observation, Prior, Rollup, ScoreKey, ScoreVector,
    StyleScores, UiBucket, UiTone,
};

/// Seconds in one day-bucket.
pub const SECONDS_PER_DAY: i64 = 86_400;
