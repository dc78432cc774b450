//! virtuwellness-cli
//!
//! Command-line front end for the assessment pipeline. Reads a submission as
//! JSON, prints the result as JSON, and logs to stderr.

pub mod commands;
pub mod config;
pub mod logging;
