//! Cache Entry Module
//!
//! Defines a cached fragment list and the expiry predicate shared by reads,
//! sweeps and stats.

use crate::registry::FragmentList;

// == Cache Entry ==
/// A page's cached fragments and when they were stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached fragment list
    pub fragments: FragmentList,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(fragments: FragmentList, inserted_at: u64) -> Self {
        Self {
            fragments,
            inserted_at,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now_ms`.
    ///
    /// Boundary condition: the comparison is strict, so an entry whose age is
    /// exactly `ttl_ms` is still valid. A clock that has moved backwards
    /// yields an age of zero.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    /// Milliseconds elapsed since insertion.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds, zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now_ms))
    }
}
