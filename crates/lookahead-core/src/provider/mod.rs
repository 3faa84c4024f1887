//! Result providers: the asynchronous lookup behind the search box.
//!
//! Both built-in providers simulate a remote service. They sleep for a
//! random multiple of a latency step and can be told to fail every n-th
//! call, so the controller's race handling can be watched in action.

mod catalog;
mod sample;

pub use catalog::CatalogProvider;
pub use sample::{SAMPLE_ITEMS, SampleProvider};

use crate::ProviderError;
use crate::config::{ProviderConfig, ProviderKind};
use futures_util::future::BoxFuture;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Ordered items returned for one query
pub type ResultList = Vec<String>;

pub type ProviderFuture = BoxFuture<'static, Result<ResultList, ProviderError>>;

/// Asynchronous query → results lookup.
///
/// The returned future owns everything it needs so the controller can spawn
/// it and keep accepting keystrokes while it runs. Calls may resolve in any
/// order relative to issuance.
pub trait ResultProvider: Send + Sync {
    fn fetch(&self, query: String) -> ProviderFuture;
}

/// Build the provider selected by `config.kind`.
#[must_use]
pub fn from_config(config: &ProviderConfig) -> Arc<dyn ResultProvider> {
    let latency = Latency::new(
        Duration::from_millis(config.latency_step_ms),
        config.max_latency_steps,
    );
    let failures = FailureInjector::every(config.fail_every);

    match config.kind {
        ProviderKind::Sample => Arc::new(SampleProvider::new(
            config.prefix.clone(),
            latency,
            failures,
        )),
        ProviderKind::Catalog => Arc::new(CatalogProvider::new(
            config.catalog.clone(),
            config.max_results,
            latency,
            failures,
        )),
    }
}

/// Simulated round-trip time: `k * step` with `k` uniform in `1..=max_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    step: Duration,
    max_steps: u32,
}

impl Latency {
    #[must_use]
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step,
            max_steps: max_steps.max(1),
        }
    }

    #[must_use]
    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, 1)
    }

    #[must_use]
    pub fn sample(&self) -> Duration {
        let steps = rand::thread_rng().gen_range(1..=self.max_steps);
        self.step * steps
    }
}

/// Fails every n-th call (1-based). Zero never fails.
#[derive(Debug, Default)]
pub struct FailureInjector {
    every: u32,
    calls: AtomicU32,
}

impl FailureInjector {
    #[must_use]
    pub fn every(every: u32) -> Self {
        Self {
            every,
            calls: AtomicU32::new(0),
        }
    }

    #[must_use]
    pub fn never() -> Self {
        Self::every(0)
    }

    /// Count one call and report whether it should fail.
    pub fn next_fails(&self) -> bool {
        let call = self.calls.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        self.every != 0 && call % self.every == 0
    }
}
