//! Logistic bag-of-words model stored as JSON.
//!
//! ```json
//! { "version": 1, "bias": -0.4,
//!   "weights": { "hopeless": 1.6, "happy": -1.2 },
//!   "negative_threshold": 0.6, "positive_threshold": 0.4 }
//! ```
//!
//! Positive weights push toward Negative sentiment: the model scores the
//! probability that the text reads as low mood.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use virtuwellness_core::models::sentiment::SentimentLabel;

use crate::error::ModelError;
use crate::lexicon;
use crate::model::{ModelProvider, ModelVerdict, SentimentModel};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagOfWordsModel {
    pub version: u32,
    pub bias: f64,
    pub weights: HashMap<String, f64>,
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(skip)]
    name: String,
}

fn default_negative_threshold() -> f64 {
    0.6
}

fn default_positive_threshold() -> f64 {
    0.4
}

impl BagOfWordsModel {
    pub fn new(name: impl Into<String>, bias: f64, weights: HashMap<String, f64>) -> Self {
        Self {
            version: FORMAT_VERSION,
            bias,
            weights,
            negative_threshold: default_negative_threshold(),
            positive_threshold: default_positive_threshold(),
            name: name.into(),
        }
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, ModelError> {
        let mut model: BagOfWordsModel = serde_json::from_str(json)?;
        if model.version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: model.version,
                supported: FORMAT_VERSION,
            });
        }
        if !(0.0..=1.0).contains(&model.positive_threshold)
            || !(0.0..=1.0).contains(&model.negative_threshold)
            || model.positive_threshold > model.negative_threshold
        {
            return Err(ModelError::Inference(format!(
                "thresholds must satisfy 0 <= positive ({}) <= negative ({}) <= 1",
                model.positive_threshold, model.negative_threshold
            )));
        }
        model.name = name.into();
        Ok(model)
    }

    /// Probability that `text` reads as low mood.
    pub fn probability(&self, text: &str) -> f64 {
        let logit = lexicon::tokenize(text)
            .filter_map(|token| self.weights.get(&token))
            .fold(self.bias, |acc, w| acc + w);
        1.0 / (1.0 + (-logit).exp())
    }
}

impl SentimentModel for BagOfWordsModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn infer(&self, text: &str) -> Result<ModelVerdict, ModelError> {
        let p = self.probability(text);
        if !p.is_finite() {
            return Err(ModelError::Inference(format!(
                "non-finite probability for {} tokens",
                lexicon::tokenize(text).count()
            )));
        }

        let label = if p > self.negative_threshold {
            SentimentLabel::Negative
        } else if p < self.positive_threshold {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        };

        Ok(ModelVerdict {
            label,
            confidence: p.max(1.0 - p),
        })
    }
}

/// Loads a [`BagOfWordsModel`] from a JSON file.
#[derive(Debug, Clone)]
pub struct BagOfWordsProvider {
    path: PathBuf,
}

impl BagOfWordsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelProvider for BagOfWordsProvider {
    fn load(&self) -> Result<Arc<dyn SentimentModel>, ModelError> {
        if !self.path.exists() {
            return Err(ModelError::NotFound(self.path.clone()));
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let name = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bag_of_words".to_string());
        let model = BagOfWordsModel::from_json(name, &contents)?;
        info!(
            path = %self.path.display(),
            vocabulary = model.weights.len(),
            "loaded bag-of-words sentiment model"
        );
        Ok(Arc::new(model))
    }
}
