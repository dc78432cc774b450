//! Caller-imposed time limit around model inference.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::error::ModelError;
use crate::model::{ModelVerdict, SentimentModel};

pub const DEFAULT_MAX_IN_FLIGHT: usize = 4;

/// Runs each inference on a worker thread and gives up after `limit`.
///
/// A timed-out worker is left to finish on its own; its result is dropped.
/// At most `max_in_flight` workers exist at once, so a model that hangs
/// costs a bounded number of threads: once every slot is held by a stuck
/// worker, calls fail with [`ModelError::Saturated`] until one finishes.
pub struct DeadlineModel {
    inner: Arc<dyn SentimentModel>,
    limit: Duration,
    max_in_flight: usize,
    in_flight: Arc<AtomicUsize>,
}

/// Releases a worker slot when the worker ends, whether it returned,
/// panicked, or was never started.
struct Slot(Arc<AtomicUsize>);

impl Drop for Slot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl DeadlineModel {
    pub fn new(inner: Arc<dyn SentimentModel>, limit: Duration) -> Self {
        Self {
            inner,
            limit,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Cap on concurrently running workers, including timed-out ones. At
    /// least one.
    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max.max(1);
        self
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Workers currently running, finished or not from the caller's view.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    fn acquire(&self) -> Option<Slot> {
        self.in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.max_in_flight).then_some(n + 1)
            })
            .ok()
            .map(|_| Slot(Arc::clone(&self.in_flight)))
    }
}

impl SentimentModel for DeadlineModel {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn infer(&self, text: &str) -> Result<ModelVerdict, ModelError> {
        let Some(slot) = self.acquire() else {
            warn!(
                model = self.inner.name(),
                in_flight = self.max_in_flight,
                "model workers saturated, skipping inference"
            );
            return Err(ModelError::Saturated(self.max_in_flight));
        };

        let (tx, rx) = mpsc::channel();
        let model = Arc::clone(&self.inner);
        let text = text.to_owned();

        thread::Builder::new()
            .name("sentiment-infer".to_string())
            .spawn(move || {
                let result = model.infer(&text);
                drop(slot);
                // Receiver may be gone after a timeout.
                let _ = tx.send(result);
            })
            .map_err(|e| ModelError::Inference(format!("failed to spawn inference worker: {e}")))?;

        match rx.recv_timeout(self.limit) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                warn!(model = self.inner.name(), limit = ?self.limit, "model inference timed out");
                Err(ModelError::DeadlineExceeded(self.limit))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(ModelError::Inference(
                "inference worker exited without a result".to_string(),
            )),
        }
    }
}
