//! Short-lived response cache keyed by endpoint and parameters

use std::collections::HashMap;

/// Default time-to-live of cached GET responses
pub const DEFAULT_TTL_MS: f64 = 30_000.0;

/// Endpoint path plus its parameters, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    path: String,
    params: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter; empty values are treated as absent.
    pub fn param(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.params.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_at: f64,
}

/// Values expire `ttl_ms` after insertion. Time is passed in by the caller
/// in milliseconds so the cache works the same in the browser and in tests.
#[derive(Debug, Clone)]
pub struct ResponseCache<V> {
    ttl_ms: f64,
    entries: HashMap<CacheKey, Entry<V>>,
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

impl<V: Clone> ResponseCache<V> {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            ttl_ms,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &CacheKey, now_ms: f64) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| now_ms - entry.stored_at < self.ttl_ms)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: CacheKey, value: V, now_ms: f64) {
        self.purge_expired(now_ms);
        self.entries.insert(
            key,
            Entry {
                value,
                stored_at: now_ms,
            },
        );
    }

    /// Drop every entry whose path starts with `prefix`.
    pub fn invalidate_prefix(&mut self, prefix: &str) {
        self.entries.retain(|key, _| !key.path.starts_with(prefix));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self, now_ms: f64) {
        let ttl = self.ttl_ms;
        self.entries.retain(|_, entry| now_ms - entry.stored_at < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let mut cache = ResponseCache::new(1_000.0);
        let key = CacheKey::new("/admin/stats").param("program", Some("Web"));
        cache.insert(key.clone(), 42u32, 0.0);
        assert_eq!(cache.get(&key, 999.0), Some(42));
        assert_eq!(cache.get(&key, 1_000.0), None);
    }

    #[test]
    fn test_params_distinguish_entries() {
        let mut cache = ResponseCache::new(1_000.0);
        let all = CacheKey::new("/admin/stats").param("program", None);
        let web = CacheKey::new("/admin/stats").param("program", Some("Web"));
        assert_eq!(all, CacheKey::new("/admin/stats").param("program", Some("")));
        cache.insert(all.clone(), 1u32, 0.0);
        cache.insert(web.clone(), 2u32, 0.0);
        assert_eq!(cache.get(&all, 10.0), Some(1));
        assert_eq!(cache.get(&web, 10.0), Some(2));
    }

    #[test]
    fn test_invalidate_prefix() {
        let mut cache = ResponseCache::new(1_000.0);
        cache.insert(CacheKey::new("/admin/stats"), 1u32, 0.0);
        cache.insert(
            CacheKey::new("/admin/history").param("month", Some("Feb")),
            2u32,
            0.0,
        );
        cache.invalidate_prefix("/admin/stats");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&CacheKey::new("/admin/stats"), 1.0), None);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_purges_expired() {
        let mut cache = ResponseCache::new(100.0);
        cache.insert(CacheKey::new("/a"), 1u32, 0.0);
        cache.insert(CacheKey::new("/b"), 2u32, 500.0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&CacheKey::new("/b"), 550.0), Some(2));
    }
}
