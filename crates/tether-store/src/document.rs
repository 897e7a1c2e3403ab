//! Per-user document and its sync envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tether_core::models::{ConfirmedStyle, Prior, RawObservation};

/// Everything stored for one user. Observations keep their free-text form
/// and are normalized on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(default)]
    pub observations: Vec<RawObservation>,
    #[serde(default)]
    pub prior: Option<Prior>,
    #[serde(default)]
    pub window_start: Option<i64>,
    #[serde(default)]
    pub confirmed: Option<ConfirmedStyle>,
}

/// Wire shape for exporting a document to another runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncEnvelope {
    pub user_id: String,
    pub exported_at: DateTime<Utc>,
    pub document: UserDocument,
}
