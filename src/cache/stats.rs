//! Cache Statistics Module
//!
//! Snapshot of entry validity plus running hit, miss and eviction counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the cache.
///
/// Entry counts come from a scan and are not atomic with respect to
/// concurrent writers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Entries currently stored, valid or not
    pub total_entries: usize,
    /// Stored entries within their TTL
    pub valid_entries: usize,
    /// Stored entries past their TTL that have not been evicted yet
    pub expired_entries: usize,
    /// Reads that returned a cached fragment list
    pub hits: u64,
    /// Reads that found nothing or found a stale entry
    pub misses: u64,
    /// Entries removed because they expired
    pub evictions: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Counters ==
/// Lock-free running counters owned by the cache.
#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl CacheCounters {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_evictions(&self, count: usize) {
        if count > 0 {
            self.evictions.fetch_add(count as u64, Ordering::Relaxed);
        }
    }

    /// Fills the counter fields of a stats snapshot.
    pub fn snapshot(&self, total: usize, valid: usize) -> CacheStats {
        CacheStats {
            total_entries: total,
            valid_entries: valid,
            expired_entries: total - valid,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
