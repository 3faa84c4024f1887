use super::{FailureInjector, Latency, ProviderFuture, ResultList, ResultProvider};
use crate::ProviderError;
use tracing::debug;

pub const SAMPLE_ITEMS: [&str; 4] = ["aaaaa", "bbbbbbb", "cccc", "cccddd"];

/// Answers every query with the four sample items, each rendered as
/// `prefix + item + query` so stale responses are easy to spot.
#[derive(Debug)]
pub struct SampleProvider {
    prefix: String,
    latency: Latency,
    failures: FailureInjector,
}

impl SampleProvider {
    #[must_use]
    pub fn new(prefix: impl Into<String>, latency: Latency, failures: FailureInjector) -> Self {
        Self {
            prefix: prefix.into(),
            latency,
            failures,
        }
    }
}

impl ResultProvider for SampleProvider {
    fn fetch(&self, query: String) -> ProviderFuture {
        let delay = self.latency.sample();
        let fails = self.failures.next_fails();
        let results: ResultList = SAMPLE_ITEMS
            .iter()
            .map(|item| format!("{}{item}{query}", self.prefix))
            .collect();

        debug!("Sample provider: '{}' resolves in {:?}", query, delay);

        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if fails {
                return Err(ProviderError::new(query, "simulated failure"));
            }
            Ok(results)
        })
    }
}
