//! Store collaborator interfaces.
//!
//! The core never owns observations or confirmations; it reads a snapshot
//! through these traits, computes, and optionally writes back
//! last-writer-wins. There is no transaction spanning the read and the write.

mod learner_state_store;
mod observation_store;

pub use learner_state_store::ILearnerStateStore;
pub use observation_store::IObservationStore;
