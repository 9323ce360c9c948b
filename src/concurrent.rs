//! Thread-safe wrapper around the ARC core.
//!
//! Every mutating operation (`insert`, `get`, `update`, `remove`, `touch`)
//! serializes through a `parking_lot::RwLock` write lock; `peek` and the
//! inspection surface run under the read lock and may proceed concurrently
//! with each other. A touching `get` is a mutator (promotion moves list
//! state), which is why only `peek` gets the shared path.
//!
//! Operations never block on anything but the lock itself: the critical
//! sections are short, CPU-bound index work. Values returned across the
//! lock boundary are clones (`V: Clone`); callers caching large payloads
//! typically use `Arc<V>` as the value type to make that clone a refcount
//! bump.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::ConfigError;
use crate::metrics::ArcMetricsSnapshot;
use crate::policy::arc::ArcCore;
use crate::traits::{ConcurrentCache, ReadOnlyCache};

/// Selects which piece of cache state [`ConcurrentArcCache::debug`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugList {
    /// Resident entries seen exactly once (recency list).
    T1,
    /// Resident entries seen more than once (frequency list).
    T2,
    /// Ghost keys recently demoted from T1.
    B1,
    /// Ghost keys recently demoted from T2.
    B2,
    /// The adaptation target `p`.
    Target,
}

/// One probe of cache state: a resident list with values, a ghost list of
/// keys, or the adaptation target. List contents are LRU → MRU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugSnapshot<K, V> {
    Resident(Vec<(K, V)>),
    Ghost(Vec<K>),
    Target(usize),
}

impl<K, V> DebugSnapshot<K, V> {
    /// Returns the resident entries, or `None` for ghost/target probes.
    pub fn into_resident(self) -> Option<Vec<(K, V)>> {
        match self {
            DebugSnapshot::Resident(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the ghost keys, or `None` for resident/target probes.
    pub fn into_ghost(self) -> Option<Vec<K>> {
        match self {
            DebugSnapshot::Ghost(keys) => Some(keys),
            _ => None,
        }
    }

    /// Returns the target value, or `None` for list probes.
    pub fn into_target(self) -> Option<usize> {
        match self {
            DebugSnapshot::Target(p) => Some(p),
            _ => None,
        }
    }
}

/// A named, internally synchronized ARC cache instance.
///
/// # Example
///
/// ```
/// use arckit::concurrent::ConcurrentArcCache;
///
/// let cache = ConcurrentArcCache::try_new("sessions", 100).unwrap();
/// cache.insert(1u64, "alpha".to_string());
///
/// // Shared-read lookup; no recency state moves
/// assert_eq!(cache.peek(&1), Some("alpha".to_string()));
///
/// // Touching lookup promotes into the frequency list
/// assert_eq!(cache.get(&1), Some("alpha".to_string()));
/// ```
#[derive(Debug)]
pub struct ConcurrentArcCache<K, V>
where
    K: Eq + Hash + Clone,
{
    name: String,
    core: RwLock<ArcCore<K, V>>,
    peek_hits: AtomicU64,
    peek_misses: AtomicU64,
}

impl<K, V> ConcurrentArcCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a named instance, rejecting a zero capacity.
    pub fn try_new(name: impl Into<String>, capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.into(),
            core: RwLock::new(ArcCore::try_new(capacity)?),
            peek_hits: AtomicU64::new(0),
            peek_misses: AtomicU64::new(0),
        })
    }

    /// Returns the diagnostic name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.core.read().capacity()
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    /// Returns `true` if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks residency without touching recency state.
    pub fn contains(&self, key: &K) -> bool {
        self.core.read().contains(key)
    }

    /// Inserts a key/value pair; returns the displaced value on resident
    /// hits.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.core.write().insert(key, value)
    }

    /// Touching lookup: promotes/bumps the entry and returns a clone of its
    /// value.
    pub fn get(&self, key: &K) -> Option<V> {
        self.core.write().get(key).cloned()
    }

    /// Shared-read lookup: returns a clone of the value without updating
    /// any recency state. Runs concurrently with other readers.
    pub fn peek(&self, key: &K) -> Option<V> {
        let result = self.core.read().peek(key).cloned();
        if result.is_some() {
            self.peek_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.peek_misses.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    /// Replaces the value for a resident key; `touch` additionally promotes
    /// it to the frequency list's MRU end. No-op (`false`) if absent.
    pub fn update(&self, key: &K, value: V, touch: bool) -> bool {
        self.core.write().update(key, value, touch)
    }

    /// Records an access without retrieving the value.
    pub fn touch(&self, key: &K) -> bool {
        self.core.write().touch(key)
    }

    /// Removes `key` from whichever list holds it; returns the value for
    /// resident keys.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.core.write().remove(key)
    }

    /// Removes all entries and ghosts and resets the adaptation target.
    pub fn clear(&self) {
        self.core.write().clear()
    }

    /// Returns the current adaptation target.
    pub fn target(&self) -> usize {
        self.core.read().target()
    }

    /// Probes one list (LRU → MRU) or the adaptation target.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::concurrent::{ConcurrentArcCache, DebugList, DebugSnapshot};
    ///
    /// let cache = ConcurrentArcCache::try_new("probe", 10).unwrap();
    /// cache.insert(1, "a");
    ///
    /// assert_eq!(
    ///     cache.debug(DebugList::T1),
    ///     DebugSnapshot::Resident(vec![(1, "a")])
    /// );
    /// assert_eq!(cache.debug(DebugList::Target), DebugSnapshot::Target(0));
    /// ```
    pub fn debug(&self, which: DebugList) -> DebugSnapshot<K, V> {
        let core = self.core.read();
        match which {
            DebugList::T1 => DebugSnapshot::Resident(core.t1_snapshot()),
            DebugList::T2 => DebugSnapshot::Resident(core.t2_snapshot()),
            DebugList::B1 => DebugSnapshot::Ghost(core.b1_keys()),
            DebugList::B2 => DebugSnapshot::Ghost(core.b2_keys()),
            DebugList::Target => DebugSnapshot::Target(core.target()),
        }
    }

    /// Snapshots counters and gauges, folding in the shared-read peek
    /// counters kept outside the core.
    pub fn metrics(&self) -> ArcMetricsSnapshot {
        let mut snap = self.core.read().metrics();
        snap.peek_hits = self.peek_hits.load(Ordering::Relaxed);
        snap.peek_misses = self.peek_misses.load(Ordering::Relaxed);
        snap.peek_calls = snap.peek_hits + snap.peek_misses;
        snap
    }
}

impl<K, V> ConcurrentCache for ConcurrentArcCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn rejects_zero_capacity() {
        assert!(ConcurrentArcCache::<u64, u64>::try_new("bad", 0).is_err());
    }

    #[test]
    fn basic_ops_through_the_lock() {
        let cache = ConcurrentArcCache::try_new("t", 10).unwrap();
        assert_eq!(cache.name(), "t");
        assert_eq!(cache.capacity(), 10);

        assert_eq!(cache.insert(1, "a"), None);
        assert_eq!(cache.peek(&1), Some("a"));
        assert_eq!(cache.get(&1), Some("a"));
        assert!(cache.contains(&1));
        assert_eq!(cache.len(), 1);

        assert!(cache.update(&1, "b", false));
        assert_eq!(cache.remove(&1), Some("b"));
        assert!(cache.is_empty());
    }

    #[test]
    fn debug_probes_each_list() {
        let cache = ConcurrentArcCache::try_new("probe", 10).unwrap();
        cache.insert(1, "a");
        cache.insert(2, "b");
        cache.get(&1);

        assert_eq!(
            cache.debug(DebugList::T1).into_resident(),
            Some(vec![(2, "b")])
        );
        assert_eq!(
            cache.debug(DebugList::T2).into_resident(),
            Some(vec![(1, "a")])
        );
        assert_eq!(cache.debug(DebugList::B1).into_ghost(), Some(vec![]));
        assert_eq!(cache.debug(DebugList::B2).into_ghost(), Some(vec![]));
        assert_eq!(cache.debug(DebugList::Target).into_target(), Some(0));
    }

    #[test]
    fn peek_metrics_are_recorded() {
        let cache = ConcurrentArcCache::try_new("m", 4).unwrap();
        cache.insert(1, "a");
        cache.peek(&1);
        cache.peek(&2);

        let snap = cache.metrics();
        assert_eq!(snap.peek_calls, 2);
        assert_eq!(snap.peek_hits, 1);
        assert_eq!(snap.peek_misses, 1);
    }

    #[test]
    fn concurrent_readers_and_writers() {
        let cache = Arc::new(ConcurrentArcCache::try_new("mt", 64).unwrap());

        let writers: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200u64 {
                        cache.insert(t * 1000 + i, i);
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200u64 {
                        let _ = cache.peek(&(t * 1000 + i));
                        let _ = cache.get(&i);
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 64);
        assert!(cache.target() <= 64);
    }
}
