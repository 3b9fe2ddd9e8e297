//! Cache Store Module
//!
//! Concurrent TTL cache mapping page names to their fragment lists.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::cache::clock::duration_to_ms;
use crate::cache::stats::CacheCounters;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::config::Config;
use crate::registry::FragmentList;

// == Page Cache ==
/// Read-through cache of page compositions with a single global TTL.
///
/// All methods take `&self`; share one instance behind an `Arc`. Keys are
/// lowercased before storage so `"Home"` and `"home"` share one entry, the
/// same way the registry matches them. Raw, case-sensitive keys would let one
/// page occupy several entries that all expire independently.
///
/// There is no size bound. Entries leave the cache only by expiring (lazily on
/// read, or through [`PageCache::sweep_expired`]), by invalidation, or by
/// [`PageCache::clear`].
#[derive(Debug)]
pub struct PageCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    counters: CacheCounters,
    ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl PageCache {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of every entry; values beyond `u64::MAX`
    ///   milliseconds are clamped to that bound
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache that reads time from `clock`.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of every entry, clamped to `u64::MAX` milliseconds
    /// * `clock` - Time source used to stamp and expire entries
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            counters: CacheCounters::default(),
            ttl_ms: duration_to_ms(ttl),
            clock,
        }
    }

    /// Creates an empty cache using the configured TTL (`CACHE_TTL`).
    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_secs(config.cache_ttl))
    }

    /// Returns the effective TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    // == Get ==
    /// Returns the cached fragments for `page_name` if present and fresh.
    ///
    /// A stale entry is removed before returning `None`.
    ///
    /// # Arguments
    /// * `page_name` - Page to look up, matched case-insensitively
    pub fn get(&self, page_name: &str) -> Option<FragmentList> {
        self.get_with_ttl(page_name).map(|(fragments, _)| fragments)
    }

    /// Like [`PageCache::get`], also returning how long the entry has left
    /// before it expires.
    ///
    /// # Returns
    /// - `Some((fragments, remaining))` on a fresh hit; `remaining` is zero
    ///   when the read lands exactly on the TTL boundary
    /// - `None` on a miss or a stale entry
    pub fn get_with_ttl(&self, page_name: &str) -> Option<(FragmentList, Duration)> {
        let key = cache_key(page_name);
        let now = self.clock.now_ms();

        {
            let entries = self.entries.read();
            match entries.get(&key) {
                None => {
                    self.counters.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired(now, self.ttl_ms) => {
                    self.counters.record_hit();
                    let remaining = entry.ttl_remaining_ms(now, self.ttl_ms);
                    return Some((entry.fragments.clone(), Duration::from_millis(remaining)));
                }
                Some(_) => {}
            }
        }

        // Another writer may have refreshed the entry since the read lock
        // was released; only drop it if it is still stale.
        let mut entries = self.entries.write();
        if entries
            .get(&key)
            .is_some_and(|entry| entry.is_expired(now, self.ttl_ms))
        {
            entries.remove(&key);
            self.counters.record_evictions(1);
        }
        self.counters.record_miss();
        None
    }

    // == Put ==
    /// Stores `fragments` for `page_name`, replacing any previous entry and
    /// restarting its TTL.
    ///
    /// # Arguments
    /// * `page_name` - Page to cache under (case-insensitive)
    /// * `fragments` - Composition to store; last writer wins
    pub fn put(&self, page_name: &str, fragments: FragmentList) {
        let entry = CacheEntry::new(fragments, self.clock.now_ms());
        self.entries.write().insert(cache_key(page_name), entry);
    }

    // == Invalidate ==
    /// Removes the entry for `page_name`.
    ///
    /// # Returns
    /// `true` if an entry was removed, `false` if none was present
    pub fn invalidate(&self, page_name: &str) -> bool {
        self.entries.write().remove(&cache_key(page_name)).is_some()
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    // == Sweep Expired ==
    /// Removes all stale entries.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, self.ttl_ms));
        let removed = before - entries.len();
        self.counters.record_evictions(removed);
        removed
    }

    // == Stats ==
    /// Scans all entries and classifies them with the same expiry predicate
    /// as [`PageCache::get`].
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now_ms();
        let entries = self.entries.read();
        let valid = entries
            .values()
            .filter(|entry| !entry.is_expired(now, self.ttl_ms))
            .count();
        self.counters.snapshot(entries.len(), valid)
    }

    // == Length ==
    /// Returns the number of stored entries, including stale ones not yet
    /// evicted.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored, fresh or stale.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Normalizes a page name into its cache key.
fn cache_key(page_name: &str) -> String {
    page_name.to_ascii_lowercase()
}
