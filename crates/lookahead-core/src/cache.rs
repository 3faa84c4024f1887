//! Session cache of provider responses keyed by the exact query text.
//!
//! Entries are never evicted. Growth is bounded only by the number of
//! distinct queries typed during a session.

use crate::provider::ResultList;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<String, ResultList>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, query: &str) -> Option<&ResultList> {
        self.entries.get(query)
    }

    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    /// Store `results` under `query`. Last write wins.
    pub fn set(&mut self, query: impl Into<String>, results: ResultList) {
        self.entries.insert(query.into(), results);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultList)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> ResultList {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = QueryCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("abc").is_none());
        assert!(!cache.contains("abc"));
    }

    #[test]
    fn test_set_then_get() {
        let mut cache = QueryCache::new();
        cache.set("abc", list(&["x", "y"]));

        assert_eq!(cache.get("abc"), Some(&list(&["x", "y"])));
        assert!(cache.contains("abc"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_exact() {
        let mut cache = QueryCache::new();
        cache.set("abc", list(&["x"]));

        assert!(cache.get("ABC").is_none());
        assert!(cache.get("abc ").is_none());
        assert!(cache.get("ab").is_none());
    }

    #[test]
    fn test_empty_list_is_a_hit() {
        let mut cache = QueryCache::new();
        cache.set("zzz", Vec::new());
        assert_eq!(cache.get("zzz"), Some(&Vec::new()));
    }

    #[test]
    fn test_last_write_wins() {
        let mut cache = QueryCache::new();
        cache.set("abc", list(&["old"]));
        cache.set("abc", list(&["new"]));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("abc"), Some(&list(&["new"])));
    }

    proptest! {
        #[test]
        fn prop_distinct_writes_are_all_retained(
            entries in proptest::collection::hash_map("[a-z]{1,8}", proptest::collection::vec("[a-z]{0,6}", 0..5), 0..32)
        ) {
            let mut cache = QueryCache::new();
            for (query, results) in &entries {
                cache.set(query.clone(), results.clone());
            }

            prop_assert_eq!(cache.len(), entries.len());
            for (query, results) in &entries {
                prop_assert_eq!(cache.get(query), Some(results));
            }
            prop_assert_eq!(cache.iter().count(), entries.len());
        }
    }
}
