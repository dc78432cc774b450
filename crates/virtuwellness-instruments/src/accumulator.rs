//! Caller-owned collection of answers for questionnaires presented one item
//! at a time. Scoring only ever sees the finished set.

use tracing::trace;
use virtuwellness_core::error::ValidationError;

use crate::Instrument;

pub struct ResponseAccumulator<'a> {
    instrument: &'a dyn Instrument,
    answers: Vec<Option<u8>>,
}

impl<'a> ResponseAccumulator<'a> {
    pub fn new(instrument: &'a dyn Instrument) -> Self {
        Self {
            instrument,
            answers: vec![None; instrument.item_count()],
        }
    }

    /// Record (or overwrite) the answer for the item at zero-based `index`.
    /// Out-of-range values are rejected immediately.
    pub fn record(&mut self, index: usize, value: u8) -> Result<(), ValidationError> {
        let len = self.answers.len();
        let item = self
            .instrument
            .items()
            .get(index)
            .ok_or(ValidationError::PositionOutOfBounds {
                position: index + 1,
                len,
            })?;
        self.instrument.item_range().check(item, index, value)?;
        self.answers[index] = Some(value);
        trace!(instrument = self.instrument.id(), index, "answer recorded");
        Ok(())
    }

    /// Zero-based index of the first unanswered item, if any.
    pub fn next_unanswered(&self) -> Option<usize> {
        self.answers.iter().position(Option::is_none)
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// One-based positions still unanswered.
    pub fn missing(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Hand over the complete answer set, in item order.
    pub fn finish(self) -> Result<Vec<u8>, ValidationError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ValidationError::Incomplete { missing });
        }
        Ok(self.answers.into_iter().flatten().collect())
    }
}
