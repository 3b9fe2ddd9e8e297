//! Page Composition Module
//!
//! Resolves a page name to its fragments through the cache, falling back to
//! the registry, and assembles the view data for the page.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::cache::PageCache;
use crate::config::Config;
use crate::error::{ComposeError, Result};
use crate::registry::{FragmentList, PageRegistry};

/// Page composed when none is requested
pub const DEFAULT_PAGE: &str = "home";

// == Composed Page ==
/// Everything needed to render a page from its fragments.
#[derive(Debug, Clone, Serialize)]
pub struct ComposedPage {
    /// The page name as requested
    pub page_name: String,
    /// Display title, e.g. "Home - Local Experiences"
    pub title: String,
    /// Fragments to render, in order
    pub fragments: FragmentList,
    /// Page-specific view data
    pub attributes: Map<String, Value>,
    /// Whether the fragments came from the cache
    pub cache_hit: bool,
    /// Milliseconds until the cached composition expires
    pub cache_ttl_remaining_ms: u64,
    pub composed_at: DateTime<Utc>,
}

// == Page Composer ==
/// Read-through composition over a [`PageCache`] and a [`PageRegistry`].
#[derive(Debug, Clone)]
pub struct PageComposer {
    registry: Arc<PageRegistry>,
    cache: Arc<PageCache>,
    site_name: String,
}

impl PageComposer {
    /// Creates a composer over shared registry and cache handles.
    ///
    /// # Arguments
    /// * `registry` - Fixed page table consulted on cache misses
    /// * `cache` - Cache shared with any other composers and the sweep task
    /// * `site_name` - Suffix for page titles
    pub fn new(registry: Arc<PageRegistry>, cache: Arc<PageCache>, site_name: impl Into<String>) -> Self {
        Self {
            registry,
            cache,
            site_name: site_name.into(),
        }
    }

    /// Builds a composer over the built-in registry and a fresh cache.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(PageRegistry::builtin()),
            Arc::new(PageCache::from_config(config)),
            config.site_name.clone(),
        )
    }

    /// Shared cache handle, e.g. for the sweep task or invalidation.
    pub fn cache(&self) -> &Arc<PageCache> {
        &self.cache
    }

    pub fn registry(&self) -> &Arc<PageRegistry> {
        &self.registry
    }

    // == Compose ==
    /// Composes `page_name`.
    ///
    /// Consults the cache first; on a miss the registry is consulted and a
    /// found composition is cached before use.
    pub fn compose(&self, page_name: &str) -> Result<ComposedPage> {
        debug!("Composing page: {}", page_name);

        let (fragments, cache_hit, ttl_remaining) = match self.cache.get_with_ttl(page_name) {
            Some((fragments, remaining)) => {
                debug!("Cache hit for page: {}", page_name);
                (fragments, true, remaining)
            }
            None => {
                debug!("Cache miss for page: {}", page_name);
                let Some(fragments) = self.registry.lookup(page_name) else {
                    warn!("Page not found: {}", page_name);
                    return Err(ComposeError::PageNotFound(page_name.to_string()));
                };
                self.cache.put(page_name, fragments.clone());
                debug!("Cached fragments for page: {}", page_name);
                (fragments, false, self.cache.ttl())
            }
        };

        Ok(ComposedPage {
            page_name: page_name.to_string(),
            title: self.page_title(page_name),
            fragments,
            attributes: page_attributes(page_name),
            cache_hit,
            cache_ttl_remaining_ms: u64::try_from(ttl_remaining.as_millis()).unwrap_or(u64::MAX),
            composed_at: Utc::now(),
        })
    }

    /// Formats the display title: capitalized page name plus the site name.
    pub fn page_title(&self, page_name: &str) -> String {
        let mut chars = page_name.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} - {}", capitalized, self.site_name)
    }
}

/// Sample view data for the built-in pages.
fn page_attributes(page_name: &str) -> Map<String, Value> {
    let attributes = match page_name.to_ascii_lowercase().as_str() {
        "product" => json!({
            "productName": "Historic Walking Tour",
            "productPrice": "$49.00",
            "productRating": 4.8,
        }),
        "home" => json!({ "featuredCount": 3 }),
        "about" => json!({ "companyName": "Local Experiences" }),
        "contact" => json!({ "contactEmail": "info@localexperiences.com" }),
        _ => json!({}),
    };

    match attributes {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
