/// Failures reported by a store collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("user not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("document decode failed for {user_id}: {reason}")]
    DocumentDecode { user_id: String, reason: String },
}
