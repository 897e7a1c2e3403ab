mod config_error;
mod store_error;
mod tether_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;
pub use tether_error::{TetherError, TetherResult};
