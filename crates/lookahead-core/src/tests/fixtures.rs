//! Test fixtures and helpers

use crate::config::SearchConfig;
use crate::provider::{ProviderFuture, ResultList, ResultProvider};
use crate::{ProviderError, ResultStore, SearchController};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply {
    Echo,
    Fixed(ResultList),
    Fail,
}

/// Provider with per-query latency and canned replies. Unscripted queries
/// answer `["<query>-1", "<query>-2"]` after the default delay.
#[derive(Debug)]
pub struct ScriptedProvider {
    default_delay: Duration,
    default_reply: Reply,
    scripts: HashMap<String, (Duration, Reply)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn echo(default_delay: Duration) -> Self {
        Self {
            default_delay,
            default_reply: Reply::Echo,
            scripts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Same list for every query.
    pub fn fixed(items: &[&str], delay: Duration) -> Self {
        Self {
            default_reply: Reply::Fixed(list(items)),
            ..Self::echo(delay)
        }
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.scripts.insert(query.to_string(), (delay, Reply::Echo));
        self
    }

    pub fn failing(mut self, query: &str, delay: Duration) -> Self {
        self.scripts.insert(query.to_string(), (delay, Reply::Fail));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ResultProvider for ScriptedProvider {
    fn fetch(&self, query: String) -> ProviderFuture {
        self.calls.lock().unwrap().push(query.clone());

        let (delay, reply) = self
            .scripts
            .get(&query)
            .cloned()
            .unwrap_or_else(|| (self.default_delay, self.default_reply.clone()));

        Box::pin(async move {
            tokio::time::sleep(delay).await;
            match reply {
                Reply::Echo => Ok(echo(&query)),
                Reply::Fixed(items) => Ok(items),
                Reply::Fail => Err(ProviderError::new(query, "scripted failure")),
            }
        })
    }
}

pub fn list(items: &[&str]) -> ResultList {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// What an unscripted echo reply contains for `query`.
pub fn echo(query: &str) -> ResultList {
    vec![format!("{query}-1"), format!("{query}-2")]
}

pub fn make_controller(provider: &Arc<ScriptedProvider>) -> SearchController {
    make_controller_with(provider, SearchConfig::default())
}

pub fn make_controller_with(
    provider: &Arc<ScriptedProvider>,
    config: SearchConfig,
) -> SearchController {
    let provider: Arc<dyn ResultProvider> = provider.clone();
    SearchController::new(config, provider, ResultStore::new())
}

/// Process continuations for `duration` of (virtual) time.
pub async fn drive_for(controller: &mut SearchController, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        tokio::select! {
            Some(continuation) = controller.next_continuation() => controller.handle(continuation),
            () = tokio::time::sleep_until(deadline) => break,
        }
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
