//! In-process result cache.
//!
//! Memoizes completed analyses by a stable hash of the normalized profile
//! identifier. Repeated lookups within one process lifetime return the
//! exact same report, which is the only single-value-per-key guarantee the
//! simulation path has: outcomes are randomized per call, so concurrent
//! first-time misses for the same key are serialized through a per-key
//! in-flight lock rather than racing to cache two different values.

use crate::core::ProfileReport;
use dashmap::DashMap;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Derive the cache key for a normalized profile identifier.
pub fn cache_key(normalized_url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized_url.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..32.min(digest.len())].to_string()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entry_count: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Default)]
struct Store {
    entries: HashMap<String, Arc<ProfileReport>>,
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
}

/// Bounded FIFO cache of finalized analysis reports.
pub struct ResultCache {
    capacity: usize,
    store: Mutex<Store>,
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            store: Mutex::new(Store::default()),
            inflight: DashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<ProfileReport>> {
        let mut store = self.store.lock();
        match store.entries.get(key).cloned() {
            Some(report) => {
                store.hits += 1;
                Some(report)
            }
            None => {
                store.misses += 1;
                None
            }
        }
    }

    pub fn put(&self, key: String, report: Arc<ProfileReport>) {
        let mut store = self.store.lock();
        if store.entries.contains_key(&key) {
            store.entries.insert(key, report);
            return;
        }
        while store.entries.len() >= self.capacity {
            let Some(evicted) = store.order.pop_front() else {
                break;
            };
            store.entries.remove(&evicted);
        }
        store.order.push_back(key.clone());
        store.entries.insert(key, report);
    }

    /// Look up a key, computing and caching the value on a miss. Concurrent
    /// callers with the same key wait for the first computation instead of
    /// racing; callers with different keys proceed independently.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> Arc<ProfileReport>
    where
        F: FnOnce() -> Arc<ProfileReport>,
    {
        let key_lock = self
            .inflight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = key_lock.lock();

        if let Some(hit) = self.get(key) {
            drop(guard);
            return hit;
        }

        let report = compute();
        self.put(key.to_string(), Arc::clone(&report));
        drop(guard);
        self.inflight.remove(key);
        report
    }

    pub fn stats(&self) -> CacheStats {
        let store = self.store.lock();
        CacheStats {
            entry_count: store.entries.len(),
            hits: store.hits,
            misses: store.misses,
        }
    }

    pub fn clear(&self) {
        let mut store = self.store.lock();
        store.entries.clear();
        store.order.clear();
    }
}
