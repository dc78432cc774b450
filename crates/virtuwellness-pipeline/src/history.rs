//! Storage boundary for assessment history.
//!
//! Results are append-only: every submission adds an independent record and
//! nothing is updated in place. Trend reporting is left to callers.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use virtuwellness_core::models::assessment::AssessmentResult;
use virtuwellness_core::models::subject::SubjectId;

use crate::error::HistoryError;

pub trait AssessmentHistory: Send + Sync {
    /// Append a fully built result.
    fn record(&self, result: AssessmentResult) -> Result<(), HistoryError>;

    /// All results for `subject`, oldest first.
    fn history(&self, subject: SubjectId) -> Result<Vec<AssessmentResult>, HistoryError>;

    fn latest(&self, subject: SubjectId) -> Result<Option<AssessmentResult>, HistoryError> {
        Ok(self.history(subject)?.pop())
    }
}

/// Process-local history, mainly for tests and single-user tools.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: RwLock<HashMap<SubjectId, Vec<AssessmentResult>>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentHistory for InMemoryHistory {
    fn record(&self, result: AssessmentResult) -> Result<(), HistoryError> {
        let mut records = self.records.write().map_err(|_| HistoryError::Poisoned)?;
        let entries = records.entry(result.subject_id()).or_default();
        // Equal timestamps keep submission order.
        let at = entries.partition_point(|r| r.created_at() <= result.created_at());
        debug!(subject = %result.subject_id(), position = at, "recording assessment");
        entries.insert(at, result);
        Ok(())
    }

    fn history(&self, subject: SubjectId) -> Result<Vec<AssessmentResult>, HistoryError> {
        let records = self.records.read().map_err(|_| HistoryError::Poisoned)?;
        Ok(records.get(&subject).cloned().unwrap_or_default())
    }
}
