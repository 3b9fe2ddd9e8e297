//! Integration Tests for Page Composition
//!
//! Exercises the registry, cache and composer together through the public API,
//! including concurrent access from plain threads.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use page_composer::cache::ManualClock;
use page_composer::{ComposeError, FragmentList, PageCache, PageComposer, PageRegistry};

const TTL: Duration = Duration::from_secs(300);

// == Helper Functions ==

fn manual_composer() -> (PageComposer, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000));
    let cache = Arc::new(PageCache::with_clock(TTL, clock.clone()));
    let composer = PageComposer::new(
        Arc::new(PageRegistry::builtin()),
        cache,
        "Local Experiences",
    );
    (composer, clock)
}

fn home_fragments() -> FragmentList {
    FragmentList::from_static(&[
        "fragments/header",
        "fragments/content",
        "fragments/offers",
        "fragments/footer",
    ])
}

// == Read-Through Scenario ==

#[test]
fn test_read_through_scenario() {
    let registry = PageRegistry::builtin();
    let cache = PageCache::new(TTL);

    assert!(cache.get("home").is_none());

    let fragments = registry.lookup("home").expect("home is registered");
    assert_eq!(fragments, home_fragments());

    cache.put("home", fragments);
    assert_eq!(cache.get("home"), Some(home_fragments()));

    assert!(cache.get("missingpage").is_none());
    assert!(registry.lookup("missingpage").is_none());
}

#[test]
fn test_composer_not_found() {
    let (composer, _) = manual_composer();

    let err = composer.compose("missingpage").unwrap_err();
    assert_eq!(err, ComposeError::PageNotFound("missingpage".to_string()));
    assert_eq!(err.to_string(), "Page not found: missingpage");
}

#[test]
fn test_composer_refreshes_after_ttl() {
    let (composer, clock) = manual_composer();

    assert!(!composer.compose("home").unwrap().cache_hit);

    clock.advance(TTL);
    assert!(composer.compose("home").unwrap().cache_hit);

    clock.advance(Duration::from_millis(1));
    let page = composer.compose("home").unwrap();
    assert!(!page.cache_hit, "Expired entry must not be served");
    assert_eq!(page.fragments, home_fragments());

    let stats = composer.cache().stats();
    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.valid_entries, 1);
    assert_eq!(stats.evictions, 1);
}

#[test]
fn test_clear_forces_registry_lookup() {
    let (composer, _) = manual_composer();
    for page in ["home", "product", "about", "contact"] {
        composer.compose(page).unwrap();
    }
    assert_eq!(composer.cache().stats().valid_entries, 4);

    composer.cache().clear();
    composer.cache().clear();

    assert!(composer.cache().is_empty());
    assert!(!composer.compose("product").unwrap().cache_hit);
}

// == Concurrency ==

#[test]
fn test_concurrent_put_race() {
    let cache = Arc::new(PageCache::new(TTL));
    let a = FragmentList::from_static(&["fragments/a1", "fragments/a2"]);
    let b = FragmentList::from_static(&["fragments/b1", "fragments/b2", "fragments/b3"]);

    for _ in 0..50 {
        let barrier = Arc::new(Barrier::new(2));
        let handles: Vec<_> = [a.clone(), b.clone()]
            .into_iter()
            .map(|value| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.put("p", value);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let winner = cache.get("p").expect("one of the writes must land");
        assert!(winner == a || winner == b, "unexpected value {}", winner);
        cache.invalidate("p");
    }
}

#[test]
fn test_concurrent_compose() {
    let (composer, _) = manual_composer();
    let composer = Arc::new(composer);
    let pages = ["home", "Product", "ABOUT", "contact", "missingpage"];

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let composer = Arc::clone(&composer);
            thread::spawn(move || {
                for i in 0..200 {
                    let page = pages[(worker + i) % pages.len()];
                    match composer.compose(page) {
                        Ok(composed) => assert!(!composed.fragments.is_empty()),
                        Err(ComposeError::PageNotFound(name)) => assert_eq!(name, "missingpage"),
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = composer.cache().stats();
    assert_eq!(stats.total_entries, 4);
    assert_eq!(stats.valid_entries, 4);
    assert_eq!(stats.hits + stats.misses, 8 * 200);
}

#[test]
fn test_concurrent_sweep_and_reads() {
    let clock = Arc::new(ManualClock::new(0));
    let cache = Arc::new(PageCache::with_clock(TTL, clock.clone()));
    for i in 0..100 {
        cache.put(&format!("page-{}", i), FragmentList::from_static(&["fragments/x"]));
    }
    clock.advance(TTL + Duration::from_secs(1));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    assert!(cache.get(&format!("page-{}", i)).is_none());
                }
            })
        })
        .collect();
    let sweeper = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || cache.sweep_expired())
    };

    for reader in readers {
        reader.join().unwrap();
    }
    sweeper.join().unwrap();

    let stats = cache.stats();
    assert!(cache.is_empty());
    assert_eq!(stats.evictions, 100, "each stale entry is evicted exactly once");
}
