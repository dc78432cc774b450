use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures on the optional model path. Never shown to end users: the
/// estimator absorbs every variant by falling back to the lexicon.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no sentiment model configured")]
    NotConfigured,

    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("model inference failed: {0}")]
    Inference(String),

    #[error("model inference exceeded {0:?}")]
    DeadlineExceeded(Duration),

    #[error("{0} earlier inferences are still running; not starting another")]
    Saturated(usize),
}
