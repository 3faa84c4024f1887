use super::{FailureInjector, Latency, ProviderFuture, ResultList, ResultProvider};
use crate::ProviderError;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::sync::Arc;
use tracing::debug;

/// Fuzzy lookup over a fixed word list, best match first.
#[derive(Debug)]
pub struct CatalogProvider {
    catalog: Arc<[String]>,
    max_results: usize,
    latency: Latency,
    failures: FailureInjector,
}

impl CatalogProvider {
    #[must_use]
    pub fn new(
        catalog: Vec<String>,
        max_results: usize,
        latency: Latency,
        failures: FailureInjector,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            max_results,
            latency,
            failures,
        }
    }
}

impl ResultProvider for CatalogProvider {
    fn fetch(&self, query: String) -> ProviderFuture {
        let delay = self.latency.sample();
        let fails = self.failures.next_fails();
        let catalog = Arc::clone(&self.catalog);
        let limit = self.max_results;

        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if fails {
                return Err(ProviderError::new(query, "simulated failure"));
            }
            Ok(fuzzy_match(&query, &catalog, limit))
        })
    }
}

/// Rank `catalog` entries against `query`; ties keep catalog order.
fn fuzzy_match(query: &str, catalog: &[String], limit: usize) -> ResultList {
    if query.is_empty() {
        return ResultList::new();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Smart,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut scored: Vec<(&String, u32)> = catalog
        .iter()
        .filter_map(|entry| {
            let haystack = Utf32Str::new(entry, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (entry, score))
        })
        .collect();

    // stable sort keeps catalog order for equal scores
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);

    debug!("Catalog match for '{}': {} hits", query, scored.len());

    scored.into_iter().map(|(entry, _)| entry.clone()).collect()
}
