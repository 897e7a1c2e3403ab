//! # tether-tone
//!
//! Maps one tone classification to a {clear, caution, alert} distribution,
//! applies caller-supplied severity nudges and picks the display tone.
//! Stateless; never touches the attachment estimator.

pub mod context;
pub mod mapper;
pub mod picker;
pub mod table;

pub use context::ContextHint;
pub use mapper::{ToneBucketMapper, ToneBucketResult, ToneClassification};
pub use picker::pick_ui_tone;
