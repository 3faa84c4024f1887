//! Request-lifecycle core for the lookahead autocomplete widget.
//!
//! The [`SearchController`] turns keystrokes into debounced provider calls,
//! answers repeated queries from the [`QueryCache`], and only publishes a
//! response to the shared [`ResultStore`] while it still matches the live
//! query. Rendering lives elsewhere; this crate never touches a terminal.

pub mod cache;
pub mod config;
pub mod dismissal;
pub mod provider;
pub mod store;

mod controller;
mod error;

#[cfg(test)]
mod tests;

pub use cache::QueryCache;
pub use controller::{Continuation, SearchController, SearchStats};
pub use dismissal::{Bounds, DismissalWatcher, Visibility};
pub use error::{Error, ProviderError, Result};
pub use provider::{ResultList, ResultProvider};
pub use store::ResultStore;
