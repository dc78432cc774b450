use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use virtuwellness_core::models::assessment::AssessmentResult;
use virtuwellness_core::models::subject::SubjectId;
use virtuwellness_instruments::Instrument;
use virtuwellness_pipeline::{AssessmentRequest, Pipeline};
use virtuwellness_sentiment::bag_of_words::BagOfWordsProvider;
use virtuwellness_sentiment::deadline::DeadlineModel;
use virtuwellness_sentiment::estimator::SentimentEstimator;
use virtuwellness_sentiment::model::{ModelAvailability, NoModel};

use crate::config::AppConfig;

/// Resolve the configured model once and wrap it in the inference deadline.
pub fn build_estimator(config: &AppConfig) -> SentimentEstimator {
    let availability = match &config.model_path {
        Some(path) => ModelAvailability::resolve(&BagOfWordsProvider::new(path)),
        None => ModelAvailability::resolve(&NoModel),
    };

    let availability = match availability {
        ModelAvailability::Available(model) => ModelAvailability::Available(Arc::new(
            DeadlineModel::new(model, config.model_timeout()),
        )),
        ModelAvailability::Unavailable => ModelAvailability::Unavailable,
    };

    SentimentEstimator::new(availability)
}

pub fn build_pipeline(config: &AppConfig) -> eyre::Result<Pipeline> {
    let pipeline = Pipeline::phq9(build_estimator(config));
    match config.normalize_to {
        Some(target) => Ok(pipeline.with_normalization(target)?),
        None => Ok(pipeline),
    }
}

pub fn parse_request(json: &str) -> eyre::Result<AssessmentRequest> {
    serde_json::from_str(json).map_err(|e| eyre::eyre!("invalid submission JSON: {e}"))
}

/// Read a submission from `input`, or stdin when `None`.
pub fn read_request(input: Option<&Path>) -> eyre::Result<AssessmentRequest> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_request(&json)
}

pub fn assess(
    pipeline: &Pipeline,
    subject: SubjectId,
    request: &AssessmentRequest,
) -> eyre::Result<AssessmentResult> {
    pipeline
        .run(subject, request)
        .map_err(|e| eyre::eyre!("invalid submission: {e}"))
}

/// Plain-text listing of the questionnaire and its answer scale.
pub fn render_questionnaire(instrument: &dyn Instrument) -> String {
    let mut output = format!(
        "{} (answer each item for the last two weeks)\n\n",
        instrument.name()
    );
    for (i, item) in instrument.items().iter().enumerate() {
        output.push_str(&format!("{:>2}. {}\n", i + 1, item.prompt));
    }
    output.push_str("\nAnswers:\n");
    for option in instrument.response_options() {
        output.push_str(&format!("  {} = {}\n", option.value, option.label));
    }
    output
}
