//! # tether-store
//!
//! Reference store collaborator: a concurrent in-memory document store keyed
//! by user id, implementing the observation and learner-state traits, plus
//! JSON export/import of a user's document for app ↔ keyboard sync.

pub mod document;
pub mod memory;

pub use document::{SyncEnvelope, UserDocument};
pub use memory::MemoryStore;
