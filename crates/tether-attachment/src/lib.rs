//! # tether-attachment
//!
//! Turns a window of timestamped behavioral observations into a stable
//! attachment-style estimate.
//!
//! Pipeline: accumulate → normalize → blend with prior → confidence →
//! window gate → argmax. Confirmation is a separate, pure gate.
//! `AttachmentLearner` wires the pipeline to the store collaborators.

pub mod accumulator;
pub mod confidence;
pub mod estimator;
pub mod learner;
pub mod prior;
pub mod window;

pub use estimator::AttachmentEstimator;
pub use learner::{AttachmentLearner, LearnerSnapshot};
pub use prior::PriorBlender;
pub use window::WindowGate;
