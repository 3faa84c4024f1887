use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Config {
    /// Load config from file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON,
    /// or fails [`Config::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot operate with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.search.min_query_length == 0 {
            return Err(Error::Config(
                "search.minQueryLength must be at least 1".to_string(),
            ));
        }
        if self.provider.max_latency_steps == 0 {
            return Err(Error::Config(
                "provider.maxLatencySteps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a query is evaluated
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,

    /// Queries shorter than this (in characters) clear the results
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Abort in-flight calls for other queries when a new call is issued.
    /// Results stay correct without it; this only saves provider work.
    #[serde(default)]
    pub abort_superseded: bool,
}

impl SearchConfig {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce() -> u64 {
    400
}
fn default_min_query_length() -> usize {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
            min_query_length: default_min_query_length(),
            abort_superseded: false,
        }
    }
}

/// Which simulated provider backs the widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Fixed sample items decorated with a prefix and the query
    #[default]
    Sample,
    /// Fuzzy match against a word catalog
    Catalog,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sample" => Ok(Self::Sample),
            "catalog" => Ok(Self::Catalog),
            other => Err(format!("unknown provider '{other}' (expected sample or catalog)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,

    /// Prepended to every sample item
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Latency is `k * latency_step_ms` with `k` drawn from `1..=max_latency_steps`
    #[serde(default = "default_latency_step")]
    pub latency_step_ms: u64,

    #[serde(default = "default_max_latency_steps")]
    pub max_latency_steps: u32,

    /// Every n-th call fails when non-zero
    #[serde(default)]
    pub fail_every: u32,

    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,

    /// Upper bound on catalog matches returned per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_prefix() -> String {
    "prefix-".to_string()
}
fn default_latency_step() -> u64 {
    1000
}
fn default_max_latency_steps() -> u32 {
    5
}
fn default_max_results() -> usize {
    20
}
fn default_catalog() -> Vec<String> {
    [
        "anyhow",
        "bytes",
        "chrono",
        "clap",
        "crossbeam",
        "crossterm",
        "directories",
        "futures",
        "hyper",
        "indicatif",
        "itertools",
        "memmap2",
        "nucleo",
        "parking_lot",
        "proptest",
        "rand",
        "ratatui",
        "rayon",
        "regex",
        "reqwest",
        "semver",
        "serde",
        "serde_json",
        "tempfile",
        "thiserror",
        "tokio",
        "tokio-util",
        "tracing",
        "tracing-appender",
        "tracing-subscriber",
        "uuid",
        "walkdir",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            prefix: default_prefix(),
            latency_step_ms: default_latency_step(),
            max_latency_steps: default_max_latency_steps(),
            fail_every: 0,
            catalog: default_catalog(),
            max_results: default_max_results(),
        }
    }
}
