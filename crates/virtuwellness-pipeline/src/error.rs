use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history store lock poisoned")]
    Poisoned,
}

/// A pipeline built with settings it cannot run with. Raised while building,
/// never from [`crate::Pipeline::run`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("normalization target must be a positive finite number, got {0}")]
    InvalidNormalization(f64),
}
