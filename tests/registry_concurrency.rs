// ==============================================
// REGISTRY + HANDLE CONCURRENCY (integration)
// ==============================================
//
// Hammers one shared instance from mixed reader/writer threads and races
// create/destroy on the registry itself. The point is integrity after the
// dust settles: capacity and target bounds hold, resident values are ones
// some thread actually wrote, and the registry map stays coherent.

use std::sync::Arc;
use std::thread;

use arckit::registry::CacheRegistry;

#[test]
fn mixed_threads_preserve_cache_integrity() {
    let registry: Arc<CacheRegistry<u64, u64>> = Arc::new(CacheRegistry::new());
    let cache = registry.create("shared", 128).unwrap();

    let mut handles = Vec::new();

    for t in 0..4u64 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..500 {
                let key = (t * 31 + i) % 200;
                cache.insert(key, key * 2);
            }
        }));
    }

    for _ in 0..3 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..500u64 {
                let key = i % 200;
                if let Some(value) = cache.get(&key) {
                    assert_eq!(value, key * 2);
                }
                if let Some(value) = cache.peek(&key) {
                    assert_eq!(value, key * 2);
                }
            }
        }));
    }

    for t in 0..2u64 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..300u64 {
                let key = (t * 17 + i) % 200;
                cache.update(&key, key * 2, i % 2 == 0);
                if i % 7 == 0 {
                    cache.remove(&key);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 128);
    assert!(cache.target() <= 128);

    let snap = cache.metrics();
    assert_eq!(snap.capacity, 128);
    assert_eq!(snap.insert_calls, 2000);
    assert_eq!(snap.get_calls, 1500);
}

#[test]
fn create_destroy_races_stay_coherent() {
    let registry: Arc<CacheRegistry<u64, u64>> = Arc::new(CacheRegistry::new());

    let mut handles = Vec::new();
    for t in 0..8u64 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            for i in 0..50u64 {
                let name = format!("cache-{}", (t + i) % 4);
                match registry.create(name.as_str(), 16) {
                    Ok(cache) => {
                        cache.insert(i, i);
                    }
                    Err(_) => {
                        // Someone else owns the name right now; use theirs
                        // if it is still registered.
                        if let Ok(cache) = registry.handle(&name) {
                            cache.insert(i, i);
                        }
                    }
                }
                if i % 10 == 9 {
                    registry.destroy(&name);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // At most the four rotating names can remain.
    assert!(registry.len() <= 4);
    for name in registry.names() {
        let cache = registry.handle(&name).unwrap();
        assert!(cache.len() <= 16);
    }
}
