//! Cache Module
//!
//! Provides the in-memory page cache with lazy TTL expiry and explicit sweeps.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::PageCache;

// == Public Constants ==
/// Default time-to-live for cached compositions (5 minutes)
pub const DEFAULT_TTL_SECS: u64 = 300;
