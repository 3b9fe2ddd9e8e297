//! Expiry Sweep Task
//!
//! Background task that periodically removes expired page compositions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PageCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between sweeps.
/// Reads already skip stale entries on their own; the sweep only reclaims
/// memory held by pages nobody has asked for since they expired.
///
/// # Returns
/// A JoinHandle for the spawned task, to be aborted at shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(PageCache::new(Duration::from_secs(300)));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: Arc<PageCache>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired pages", removed);
            } else {
                debug!("Cache sweep: no expired pages found");
            }
        }
    })
}
