//! Search controller: debounced evaluation, cache short-circuit and
//! stale-response suppression.
//!
//! All state lives in [`SearchController`] and is only mutated through its
//! methods, called from one task. Timer expiries and provider completions
//! run as spawned tasks that report back as [`Continuation`]s; the owner
//! feeds them to [`SearchController::handle`] (usually from a
//! `tokio::select!` loop alongside input events).

mod debounce;

use crate::ProviderError;
use crate::cache::QueryCache;
use crate::config::SearchConfig;
use crate::provider::{ResultList, ResultProvider};
use crate::store::ResultStore;
use debounce::Debouncer;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

/// Deferred work delivered back to the controller.
#[derive(Debug)]
pub enum Continuation {
    /// The quiet period scheduled by `on_query_changed` ended
    DebounceElapsed { generation: u64 },
    /// A provider call finished
    Resolved {
        call_id: u64,
        query: String,
        outcome: Result<ResultList, ProviderError>,
    },
}

/// Counters describing what the controller has done this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub evaluations: u64,
    pub short_queries: u64,
    pub cache_hits: u64,
    pub provider_calls: u64,
    pub stale_discards: u64,
    pub failures: u64,
    pub aborted_calls: u64,
}

#[derive(Debug)]
struct InFlight {
    query: String,
    handle: JoinHandle<()>,
}

pub struct SearchController {
    config: SearchConfig,
    provider: Arc<dyn ResultProvider>,
    store: ResultStore,
    cache: QueryCache,

    /// Live text of the search field
    query: String,

    /// True while a call for the live query is outstanding
    loading: bool,

    debouncer: Debouncer,
    in_flight: HashMap<u64, InFlight>,
    next_call_id: u64,
    stats: SearchStats,
    last_error: Option<ProviderError>,

    tx: UnboundedSender<Continuation>,
    rx: UnboundedReceiver<Continuation>,
}

impl SearchController {
    #[must_use]
    pub fn new(
        config: SearchConfig,
        provider: Arc<dyn ResultProvider>,
        store: ResultStore,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            debouncer: Debouncer::new(config.debounce()),
            config,
            provider,
            store,
            cache: QueryCache::new(),
            query: String::new(),
            loading: false,
            in_flight: HashMap::new(),
            next_call_id: 0,
            stats: SearchStats::default(),
            last_error: None,
            tx,
            rx,
        }
    }

    /// Record the full field text and restart the debounce timer.
    ///
    /// The loading flag is left as is; the next evaluation settles it, so
    /// an indicator raised for the previous text can stay up for one quiet
    /// period even if the new text turns out to be cached.
    ///
    /// Must be called inside a tokio runtime.
    pub fn on_query_changed(&mut self, text: impl Into<String>) {
        self.query = text.into();
        trace!("Query changed: '{}'", self.query);
        self.debouncer.schedule(&self.tx);
    }

    /// Evaluate the live query now. This is what the debounce timer runs.
    pub fn evaluate(&mut self) {
        self.stats.evaluations += 1;
        let query = self.query.clone();

        if query.chars().count() < self.config.min_query_length {
            self.stats.short_queries += 1;
            trace!("Query '{}' below minimum length, clearing", query);
            self.store.clear();
            self.refresh_loading();
            return;
        }

        if let Some(cached) = self.cache.get(&query) {
            self.stats.cache_hits += 1;
            debug!("Cache hit: '{}'", query);
            self.store.write(cached.clone());
            self.refresh_loading();
            return;
        }

        if self.config.abort_superseded {
            self.abort_other_calls(&query);
        }

        self.issue_call(query);
        self.loading = true;
    }

    /// Apply a continuation produced by a timer or provider task.
    pub fn handle(&mut self, continuation: Continuation) {
        match continuation {
            Continuation::DebounceElapsed { generation } => {
                if self.debouncer.accept(generation) {
                    self.evaluate();
                }
            }
            Continuation::Resolved {
                call_id,
                query,
                outcome,
            } => self.resolve(call_id, query, outcome),
        }
    }

    /// Wait for the next continuation. Never yields `None` while the
    /// controller is alive since it holds a sender itself.
    pub async fn next_continuation(&mut self) -> Option<Continuation> {
        self.rx.recv().await
    }

    /// Process continuations until no timer or provider call is pending.
    pub async fn settle(&mut self) {
        while !self.is_idle() {
            match self.next_continuation().await {
                Some(continuation) => self.handle(continuation),
                None => break,
            }
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && self.in_flight.is_empty()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    #[must_use]
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn pending_calls(&self) -> usize {
        self.in_flight.len()
    }

    /// Most recent provider failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&ProviderError> {
        self.last_error.as_ref()
    }

    fn issue_call(&mut self, query: String) {
        let call_id = self.next_call_id;
        self.next_call_id += 1;
        self.stats.provider_calls += 1;

        debug!("Provider call #{}: '{}'", call_id, query);

        let future = self.provider.fetch(query.clone());
        let tx = self.tx.clone();
        let task_query = query.clone();
        let handle = tokio::spawn(async move {
            let outcome = future.await;
            let _ = tx.send(Continuation::Resolved {
                call_id,
                query: task_query,
                outcome,
            });
        });

        self.in_flight.insert(call_id, InFlight { query, handle });
    }

    fn resolve(&mut self, call_id: u64, query: String, outcome: Result<ResultList, ProviderError>) {
        if self.in_flight.remove(&call_id).is_none() {
            trace!("Dropping result of withdrawn call #{}", call_id);
            return;
        }

        match outcome {
            Ok(results) => {
                self.cache.set(query.clone(), results.clone());
                if query == self.query {
                    debug!("Call #{} accepted: '{}' ({} items)", call_id, query, results.len());
                    self.store.write(results);
                } else {
                    self.stats.stale_discards += 1;
                    debug!(
                        "Call #{} stale: '{}' superseded by '{}'",
                        call_id, query, self.query
                    );
                }
            }
            Err(e) => {
                self.stats.failures += 1;
                error!("Failed to fetch results: {}", e);
                self.last_error = Some(e);
            }
        }

        self.refresh_loading();
    }

    fn abort_other_calls(&mut self, keep: &str) {
        let before = self.in_flight.len();
        self.in_flight.retain(|id, call| {
            if call.query == keep {
                return true;
            }
            debug!("Aborting superseded call #{}: '{}'", id, call.query);
            call.handle.abort();
            false
        });
        self.stats.aborted_calls += (before - self.in_flight.len()) as u64;
    }

    fn refresh_loading(&mut self) {
        self.loading = self.in_flight.values().any(|call| call.query == self.query);
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        for call in self.in_flight.values() {
            call.handle.abort();
        }
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("query", &self.query)
            .field("loading", &self.loading)
            .field("cached_queries", &self.cache.len())
            .field("pending_calls", &self.in_flight.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
