//! Injection point for an optional statistical sentiment model.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};
use virtuwellness_core::models::sentiment::SentimentLabel;

use crate::error::ModelError;

/// Raw output of a model before it becomes a `SentimentSignal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelVerdict {
    pub label: SentimentLabel,
    pub confidence: f64,
}

/// A loaded, read-only model. Shared across threads without locking.
pub trait SentimentModel: Send + Sync {
    fn name(&self) -> &str;

    fn infer(&self, text: &str) -> Result<ModelVerdict, ModelError>;
}

/// Source of a model, consulted once at startup.
pub trait ModelProvider {
    fn load(&self) -> Result<Arc<dyn SentimentModel>, ModelError>;
}

/// Outcome of resolving a [`ModelProvider`].
#[derive(Clone, Default)]
pub enum ModelAvailability {
    Available(Arc<dyn SentimentModel>),
    #[default]
    Unavailable,
}

impl ModelAvailability {
    /// Load the model, treating any failure as "unavailable".
    pub fn resolve(provider: &dyn ModelProvider) -> Self {
        match provider.load() {
            Ok(model) => {
                info!(model = model.name(), "sentiment model loaded");
                ModelAvailability::Available(model)
            }
            Err(ModelError::NotConfigured) => {
                info!("no sentiment model configured, using lexicon only");
                ModelAvailability::Unavailable
            }
            Err(e) => {
                warn!(error = %e, "sentiment model unavailable, using lexicon only");
                ModelAvailability::Unavailable
            }
        }
    }

    pub fn model(&self) -> Option<&Arc<dyn SentimentModel>> {
        match self {
            ModelAvailability::Available(model) => Some(model),
            ModelAvailability::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.model().is_some()
    }
}

impl fmt::Debug for ModelAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelAvailability::Available(model) => {
                f.debug_tuple("Available").field(&model.name()).finish()
            }
            ModelAvailability::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// Provider that never has a model. Useful when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModel;

impl ModelProvider for NoModel {
    fn load(&self) -> Result<Arc<dyn SentimentModel>, ModelError> {
        Err(ModelError::NotConfigured)
    }
}
