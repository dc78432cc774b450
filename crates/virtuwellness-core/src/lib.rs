//! virtuwellness-core
//!
//! Pure domain types shared by every VirtuWellness crate: severity tiers,
//! sentiment signals, scores, recommendation sections and the immutable
//! assessment result record. No I/O happens here.

pub mod error;
pub mod models;
