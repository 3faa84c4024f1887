//! Test module for lookahead-core
//!
//! Covers the controller request lifecycle end to end:
//! - Minimum query length and cache short-circuit
//! - Debounce coalescing
//! - Stale-response suppression under both resolution orders
//! - Loading flag under overlapping calls
//! - Provider failures and advisory aborts
//! - Config loading from disk

mod fixtures;
