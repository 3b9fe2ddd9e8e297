//! Page Composer - assembles pages from reusable fragments
//!
//! A TTL cache sits in front of a fixed page registry so repeated requests for
//! the same page skip the registry lookup.

pub mod cache;
pub mod compose;
pub mod config;
pub mod error;
pub mod registry;
pub mod tasks;

pub use cache::PageCache;
pub use compose::{ComposedPage, PageComposer};
pub use config::Config;
pub use error::ComposeError;
pub use registry::{FragmentList, PageRegistry};
pub use tasks::spawn_sweep_task;
