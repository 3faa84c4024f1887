use super::Continuation;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;

/// Single cancellable timer. Each `schedule` aborts the previous timer and
/// bumps the generation, so an expiry that raced the abort is still
/// recognisable as outdated when it arrives.
#[derive(Debug)]
pub(crate) struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Restart the quiet period. Must be called inside a tokio runtime.
    pub(crate) fn schedule(&mut self, tx: &UnboundedSender<Continuation>) {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        let delay = self.delay;
        let tx = tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Continuation::DebounceElapsed { generation });
        }));
    }

    /// Whether an expiry belongs to the most recent `schedule` call.
    pub(crate) fn accept(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && generation == self.generation {
            self.pending = None;
            true
        } else {
            trace!(
                "Ignoring outdated debounce expiry {} (current {})",
                generation, self.generation
            );
            false
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
