use std::sync::Arc;

use crate::errors::TetherResult;
use crate::models::ConfirmedStyle;

/// Durable per-user learner state: window start and confirmed style.
pub trait ILearnerStateStore: Send + Sync {
    /// Window start in seconds since epoch, if learning has begun.
    fn window_start(&self, user_id: &str) -> TetherResult<Option<i64>>;

    /// Set the window start if unset. Returns the effective start, which is
    /// the existing one when already set.
    fn start_window(&self, user_id: &str, at: i64) -> TetherResult<i64>;

    fn confirmed_style(&self, user_id: &str) -> TetherResult<Option<ConfirmedStyle>>;

    /// Overwrite the confirmation. Last writer wins.
    fn put_confirmed_style(&self, user_id: &str, confirmed: &ConfirmedStyle) -> TetherResult<()>;

    /// Clear the window start and confirmation.
    fn reset(&self, user_id: &str) -> TetherResult<()>;
}

impl<T: ILearnerStateStore + ?Sized> ILearnerStateStore for Arc<T> {
    fn window_start(&self, user_id: &str) -> TetherResult<Option<i64>> {
        (**self).window_start(user_id)
    }
    fn start_window(&self, user_id: &str, at: i64) -> TetherResult<i64> {
        (**self).start_window(user_id, at)
    }
    fn confirmed_style(&self, user_id: &str) -> TetherResult<Option<ConfirmedStyle>> {
        (**self).confirmed_style(user_id)
    }
    fn put_confirmed_style(&self, user_id: &str, confirmed: &ConfirmedStyle) -> TetherResult<()> {
        (**self).put_confirmed_style(user_id, confirmed)
    }
    fn reset(&self, user_id: &str) -> TetherResult<()> {
        (**self).reset(user_id)
    }
}
