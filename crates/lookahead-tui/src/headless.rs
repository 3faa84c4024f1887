//! One-shot query mode: a single search through the same debounce, cache
//! and provider path the interactive widget uses, without a terminal.

use lookahead_core::config::Config;
use lookahead_core::{ResultList, ResultStore, SearchController, provider};

/// Controller wired to the provider selected in `config`, with a fresh store.
#[must_use]
pub fn build_controller(config: &Config) -> SearchController {
    SearchController::new(
        config.search.clone(),
        provider::from_config(&config.provider),
        ResultStore::new(),
    )
}

/// Type `query` into a fresh controller and wait for the outcome.
///
/// # Errors
///
/// Returns [`lookahead_core::Error::Provider`] if the provider call failed.
pub async fn run_query(config: &Config, query: &str) -> lookahead_core::Result<ResultList> {
    let mut controller = build_controller(config);
    controller.on_query_changed(query);
    controller.settle().await;

    tracing::debug!("Query stats: {:?}", controller.stats());

    if let Some(err) = controller.last_error() {
        return Err(err.clone().into());
    }
    Ok(controller.store().current())
}
