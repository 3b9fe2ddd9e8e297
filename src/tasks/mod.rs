//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the composer is up.
//!
//! # Tasks
//! - Expiry sweep: removes stale page compositions at a configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
