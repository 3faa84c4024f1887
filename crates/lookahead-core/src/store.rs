//! Session-wide slot holding the result list currently eligible for display.
//!
//! Any number of regions may hold a [`ResultStore`] clone and read or
//! subscribe to it. Only the [`crate::SearchController`] is expected to
//! write; nothing enforces that, and the store itself makes no freshness
//! decisions.

use crate::provider::ResultList;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct ResultStore {
    tx: Arc<watch::Sender<ResultList>>,
}

impl ResultStore {
    /// Create a store holding an empty list.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ResultList::new());
        Self { tx: Arc::new(tx) }
    }

    /// Replace the visible list and wake every subscriber.
    pub fn write(&self, results: ResultList) {
        trace!("Result store write: {} items", results.len());
        self.tx.send_replace(results);
    }

    pub fn clear(&self) {
        self.write(ResultList::new());
    }

    #[must_use]
    pub fn current(&self) -> ResultList {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every subsequent write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ResultList> {
        self.tx.subscribe()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
