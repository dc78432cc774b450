//! virtuwellness-pipeline
//!
//! Orchestrates one assessment: score, classify, estimate sentiment, adjust
//! the tier, select recommendations, and build the immutable result record.
//! Stateless apart from the read-only sentiment model handle.

pub mod adjust;
pub mod error;
pub mod history;
pub mod pipeline;
pub mod recommend;
pub mod request;

pub use pipeline::Pipeline;
pub use request::{AssessmentRequest, Role};
