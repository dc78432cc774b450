//! virtuwellness-sentiment
//!
//! Coarse sentiment estimation for the free text attached to an assessment.
//! A lexical estimator is always available; an optional statistical model,
//! resolved once at startup, overrides it when present and healthy.

pub mod bag_of_words;
pub mod deadline;
pub mod error;
pub mod estimator;
pub mod lexicon;
pub mod model;
