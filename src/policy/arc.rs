//! Adaptive Replacement Cache (ARC) replacement policy.
//!
//! Self-tunes between recency and frequency preferences by maintaining four
//! rank-ordered lists and a dynamic target parameter adjusted on every ghost
//! hit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ArcCore<K, V> Layout                           │
//! │                                                                         │
//! │        L1 ladder (recency)              L2 ladder (frequency)           │
//! │   ┌──────────────────────────┐     ┌──────────────────────────┐         │
//! │   │ T1: OrderedList<K, V>    │     │ T2: OrderedList<K, V>    │         │
//! │   │ seen once, resident      │     │ seen twice+, resident    │         │
//! │   │ LRU ──────────────► MRU  │     │ LRU ──────────────► MRU  │         │
//! │   └───────────┬──────────────┘     └───────────┬──────────────┘         │
//! │               │ demote (replace)               │ demote (replace)       │
//! │               ▼                                ▼                        │
//! │   ┌──────────────────────────┐     ┌──────────────────────────┐         │
//! │   │ B1: GhostList<K>         │     │ B2: GhostList<K>         │         │
//! │   │ keys only                │     │ keys only                │         │
//! │   └──────────────────────────┘     └──────────────────────────┘         │
//! │                                                                         │
//! │   target p ∈ [0, c]: intended size of T1                                │
//! │   • insert hits B1 → p grows  (workload rewards recency)                │
//! │   • insert hits B2 → p shrinks (workload rewards frequency)             │
//! │                                                                         │
//! │   Constraints maintained after every operation:                         │
//! │     |T1| + |T2| ≤ c       |T1| + |B1| ≤ c                               │
//! │     |T2| + |B2| ≤ 2c      |T1| + |T2| + |B1| + |B2| ≤ 2c                │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! Insert dispatch (by membership)
//! ───────────────────────────────
//!
//!   in T1          second access: move to T2 MRU, overwrite value
//!   in T2          overwrite value, bump to T2 MRU
//!   in B1 (ghost)  grow p, replace(false), unghost, insert at T2 MRU
//!   in B2 (ghost)  shrink p, replace(true), unghost, insert at T2 MRU
//!   nowhere        make_room(), insert at T1 MRU
//!
//! Replace (demote one resident)
//! ─────────────────────────────
//!
//!   if |T1| ≥ 1 and (|T1| > p, or |T1| == p on a B2 hit):
//!     T1 LRU → B1
//!   else:
//!     T2 LRU → B2
//! ```
//!
//! ## Key Components
//!
//! - [`ArcCore`]: the four-list state machine; single-threaded.
//! - [`crate::concurrent::ConcurrentArcCache`]: lock-based wrapper.
//!
//! ## Algorithm Properties
//!
//! - **Adaptive**: no tuning knob; `p` converges to the workload's
//!   recency/frequency mix.
//! - **Scan resistant**: one-time scans pass through T1 without displacing
//!   the frequency ladder.
//! - **Bounded**: at most `c` values and `2c` keys of state.
//!
//! ## References
//!
//! - Megiddo & Modha, "ARC: A Self-Tuning, Low Overhead Replacement
//!   Cache", FAST 2003

use std::hash::Hash;

use crate::ds::{GhostList, OrderedList};
use crate::error::ConfigError;
use crate::metrics::{ArcMetrics, ArcMetricsSnapshot};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Core Adaptive Replacement Cache implementation.
///
/// Maps keys to values under a fixed capacity `c`, choosing eviction
/// victims by the ARC algorithm:
///
/// - **T1**: resident entries seen exactly once recently (recency list)
/// - **T2**: resident entries seen more than once (frequency list)
/// - **B1**: ghost keys recently demoted from T1
/// - **B2**: ghost keys recently demoted from T2
///
/// The adaptation target `p` is the intended size of T1. It starts at 0 and
/// moves only on ghost hits: a hit in B1 means an entry evicted for recency
/// reasons was wanted again (grow `p`), a hit in B2 the converse.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Eq + Hash + Clone`
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use arckit::policy::arc::ArcCore;
/// use arckit::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache = ArcCore::new(100);
///
/// // First insert lands in T1
/// cache.insert("page", "content");
/// assert_eq!(cache.t1_len(), 1);
///
/// // A touching get promotes to T2
/// assert_eq!(cache.get(&"page"), Some(&"content"));
/// assert_eq!(cache.t2_len(), 1);
/// ```
///
/// # Thread Safety
///
/// `ArcCore` is single-threaded. Wrap it in
/// [`ConcurrentArcCache`](crate::concurrent::ConcurrentArcCache) for shared
/// access.
#[derive(Debug)]
pub struct ArcCore<K, V>
where
    K: Eq + Hash + Clone,
{
    t1: OrderedList<K, V>,
    t2: OrderedList<K, V>,
    b1: GhostList<K>,
    b2: GhostList<K>,
    /// Adaptation target: intended size of T1, in `[0, capacity]`.
    p: usize,
    capacity: usize,
    metrics: ArcMetrics,
}

impl<K, V> ArcCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a new ARC cache with the given capacity.
    ///
    /// A capacity of 0 yields a cache that ignores all inserts; use
    /// [`try_new`](ArcCore::try_new) to reject it at the boundary instead.
    pub fn new(capacity: usize) -> Self {
        Self {
            t1: OrderedList::with_capacity(capacity),
            t2: OrderedList::with_capacity(capacity),
            b1: GhostList::with_capacity(capacity),
            b2: GhostList::with_capacity(capacity),
            p: 0,
            capacity,
            metrics: ArcMetrics::default(),
        }
    }

    /// Creates a new ARC cache, rejecting a zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::policy::arc::ArcCore;
    ///
    /// assert!(ArcCore::<u64, u64>::try_new(16).is_ok());
    /// assert!(ArcCore::<u64, u64>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(Self::new(capacity))
    }

    /// Returns the current adaptation target `p` (intended size of T1).
    pub fn target(&self) -> usize {
        self.p
    }

    /// Returns the number of resident entries in T1 (seen once).
    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    /// Returns the number of resident entries in T2 (seen more than once).
    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    /// Returns the number of ghost keys in B1.
    pub fn b1_len(&self) -> usize {
        self.b1.len()
    }

    /// Returns the number of ghost keys in B2.
    pub fn b2_len(&self) -> usize {
        self.b2.len()
    }

    /// Returns the value for `key` without disturbing recency state.
    ///
    /// Ghost membership is not a hit: only T1 and T2 hold values.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.t1.get(key).or_else(|| self.t2.get(key))
    }

    /// Touching lookup: returns the value and records the access.
    ///
    /// A hit in T1 promotes the entry to the MRU end of T2 (it has now been
    /// seen more than once); a hit in T2 re-ranks it at the MRU end.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::policy::arc::ArcCore;
    /// use arckit::traits::CoreCache;
    ///
    /// let mut cache = ArcCore::new(10);
    /// cache.insert(1, "a");
    ///
    /// assert_eq!(cache.get(&1), Some(&"a"));
    /// assert_eq!(cache.t1_len(), 0);
    /// assert_eq!(cache.t2_len(), 1);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.metrics.get_calls += 1;
        if let Some(value) = self.t1.remove(key) {
            self.metrics.get_hits += 1;
            self.t2.put_mru(key.clone(), value);
            return self.t2.get(key);
        }
        if self.t2.touch(key) {
            self.metrics.get_hits += 1;
            return self.t2.get(key);
        }
        self.metrics.get_misses += 1;
        None
    }

    /// Records an access without retrieving the value.
    ///
    /// Returns `true` if the key was resident. Equivalent to a touching
    /// [`get`](ArcCore::get) with the value discarded.
    pub fn touch(&mut self, key: &K) -> bool {
        if let Some(value) = self.t1.remove(key) {
            self.t2.put_mru(key.clone(), value);
            true
        } else {
            self.t2.touch(key)
        }
    }

    /// Replaces the value for a resident key.
    ///
    /// With `touch`, the entry additionally moves to the MRU end of T2
    /// (from either resident list); without it, list membership and rank
    /// are left alone. Returns `false` without side effects if the key is
    /// not resident; ghosts are not revived by updates.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::policy::arc::ArcCore;
    /// use arckit::traits::CoreCache;
    ///
    /// let mut cache = ArcCore::new(10);
    /// cache.insert(1, "a");
    ///
    /// // In-place update: still in T1, same position
    /// assert!(cache.update(&1, "a2", false));
    /// assert_eq!(cache.t1_len(), 1);
    ///
    /// // Touching update promotes
    /// assert!(cache.update(&1, "a3", true));
    /// assert_eq!(cache.t2_len(), 1);
    ///
    /// assert!(!cache.update(&2, "x", true));
    /// ```
    pub fn update(&mut self, key: &K, value: V, touch: bool) -> bool {
        self.metrics.update_calls += 1;
        let hit = if touch {
            if let Some(_old) = self.t1.remove(key) {
                self.t2.put_mru(key.clone(), value);
                true
            } else if self.t2.contains(key) {
                self.t2.put_mru(key.clone(), value);
                true
            } else {
                false
            }
        } else if self.t1.contains(key) {
            self.t1.update(key, value)
        } else {
            self.t2.update(key, value)
        };
        if hit {
            self.metrics.update_hits += 1;
        }
        hit
    }

    /// Inserts a key/value pair, returning the displaced value when the key
    /// was already resident.
    ///
    /// Dispatches on membership:
    ///
    /// 1. **T1 hit**: second access: promote to T2 MRU with the new value.
    /// 2. **T2 hit**: overwrite and bump to T2 MRU.
    /// 3. **B1 ghost hit**: grow the target, demote one resident, then
    ///    re-admit directly into T2 (the key has proven reuse).
    /// 4. **B2 ghost hit**: shrink the target, demote one resident, then
    ///    re-admit into T2.
    /// 5. **Miss**: trim ghosts/residents as the ladder constraints
    ///    require, then insert at T1 MRU.
    ///
    /// The target never moves on resident hits; only ghost hits teach.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.metrics.insert_calls += 1;
        if self.capacity == 0 {
            return None;
        }

        if let Some(old) = self.t1.remove(&key) {
            self.metrics.insert_resident_hits += 1;
            self.t2.put_mru(key, value);
            return Some(old);
        }

        if let Some(old) = self.t2.remove(&key) {
            self.metrics.insert_resident_hits += 1;
            self.t2.put_mru(key, value);
            return Some(old);
        }

        if self.b1.contains(&key) {
            self.metrics.insert_ghost_hits_b1 += 1;
            self.grow_target();
            self.replace(false);
            self.b1.remove(&key);
            self.t2.put_mru(key, value);
            return None;
        }

        if self.b2.contains(&key) {
            self.metrics.insert_ghost_hits_b2 += 1;
            self.shrink_target();
            self.replace(true);
            self.b2.remove(&key);
            self.t2.put_mru(key, value);
            return None;
        }

        self.metrics.insert_misses += 1;
        self.make_room();
        self.t1.put_mru(key, value);
        None
    }

    /// Removes `key` from whichever list holds it (at most one).
    ///
    /// Returns the value for resident keys; purging a ghost returns `None`.
    /// The adaptation target is unaffected.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.metrics.remove_calls += 1;
        if let Some(value) = self.t1.remove(key).or_else(|| self.t2.remove(key)) {
            self.metrics.remove_hits += 1;
            return Some(value);
        }
        let _ = self.b1.remove(key) || self.b2.remove(key);
        None
    }

    /// Removes all entries and ghosts and resets the target to 0.
    pub fn clear(&mut self) {
        self.t1.clear();
        self.t2.clear();
        self.b1.clear();
        self.b2.clear();
        self.p = 0;
    }

    /// Returns resident T1 entries in LRU → MRU order.
    pub fn t1_snapshot(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.t1.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Returns resident T2 entries in LRU → MRU order.
    pub fn t2_snapshot(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.t2.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Returns B1 ghost keys in demotion order (oldest first).
    pub fn b1_keys(&self) -> Vec<K> {
        self.b1.iter().cloned().collect()
    }

    /// Returns B2 ghost keys in demotion order (oldest first).
    pub fn b2_keys(&self) -> Vec<K> {
        self.b2.iter().cloned().collect()
    }

    /// Snapshots the counters together with current list-length gauges.
    pub fn metrics(&self) -> ArcMetricsSnapshot {
        let mut snap = self.metrics.to_snapshot();
        snap.t1_len = self.t1.len();
        snap.t2_len = self.t2.len();
        snap.b1_len = self.b1.len();
        snap.b2_len = self.b2.len();
        snap.target = self.p;
        snap.capacity = self.capacity;
        snap
    }

    /// Demotes one resident entry to its ghost list.
    ///
    /// T1 gives up its LRU entry when it is over target, or exactly at
    /// target while serving a B2 ghost hit (`in_b2`); otherwise T2 does.
    /// A no-op when the chosen list is empty.
    fn replace(&mut self, in_b2: bool) {
        let t1_len = self.t1.len();
        if t1_len >= 1 && ((in_b2 && t1_len == self.p) || t1_len > self.p) {
            if let Some((key, _value)) = self.t1.pop_lru() {
                self.metrics.demotions_b1 += 1;
                self.b1.record(key);
            }
        } else if let Some((key, _value)) = self.t2.pop_lru() {
            self.metrics.demotions_b2 += 1;
            self.b2.record(key);
        }
    }

    /// Makes room for one new T1 entry before a pure miss.
    ///
    /// Maintains the ladder constraints: when the recency ladder
    /// `L1 = T1 ∪ B1` is at capacity, age out its ghost tail (or, with no
    /// ghosts left, drop T1's LRU outright; no ghost is kept for a key the
    /// ladder has no room to remember). Otherwise, once total state reaches
    /// capacity, demote one resident, first trimming B2 when total state
    /// would exceed `2c`.
    fn make_room(&mut self) {
        let l1 = self.t1.len() + self.b1.len();
        let l2 = self.t2.len() + self.b2.len();

        if l1 == self.capacity {
            if self.t1.len() < self.capacity {
                if self.b1.pop_lru().is_some() {
                    self.metrics.ghost_trims_b1 += 1;
                }
                self.replace(false);
            } else if self.t1.pop_lru().is_some() {
                self.metrics.hard_evictions += 1;
            }
        } else if l1 < self.capacity && l1 + l2 >= self.capacity {
            if l1 + l2 >= 2 * self.capacity && self.b2.pop_lru().is_some() {
                self.metrics.ghost_trims_b2 += 1;
            }
            self.replace(false);
        }
    }

    /// B1 ghost hit: raise the target by `max(⌊|B2| / |B1|⌋, 1)`, capped
    /// at capacity. The step is 1 when B1 is empty; the division is never
    /// evaluated with a zero denominator.
    fn grow_target(&mut self) {
        let b1 = self.b1.len();
        let b2 = self.b2.len();
        let step = if b1 == 0 { 1 } else { (b2 / b1).max(1) };
        self.p = (self.p + step).min(self.capacity);
    }

    /// B2 ghost hit: lower the target by `max(⌊|B1| / |B2|⌋, 1)`, floored
    /// at 0.
    fn shrink_target(&mut self) {
        let b1 = self.b1.len();
        let b2 = self.b2.len();
        let step = if b2 == 0 { 1 } else { (b1 / b2).max(1) };
        self.p = self.p.saturating_sub(step);
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates the ARC invariants; panics on violation.
    pub fn debug_validate_invariants(&self)
    where
        K: std::fmt::Debug,
    {
        self.t1.debug_validate_invariants();
        self.t2.debug_validate_invariants();
        self.b1.debug_validate_invariants();
        self.b2.debug_validate_invariants();

        // Pairwise key disjointness across the four lists.
        for (key, _) in self.t1.iter() {
            assert!(!self.t2.contains(key), "key {key:?} in both T1 and T2");
            assert!(!self.b1.contains(key), "key {key:?} in both T1 and B1");
            assert!(!self.b2.contains(key), "key {key:?} in both T1 and B2");
        }
        for (key, _) in self.t2.iter() {
            assert!(!self.b1.contains(key), "key {key:?} in both T2 and B1");
            assert!(!self.b2.contains(key), "key {key:?} in both T2 and B2");
        }
        for key in self.b1.iter() {
            assert!(!self.b2.contains(key), "key {key:?} in both B1 and B2");
        }

        let t1 = self.t1.len();
        let t2 = self.t2.len();
        let b1 = self.b1.len();
        let b2 = self.b2.len();
        let c = self.capacity;

        assert!(t1 + t2 <= c, "residents {} exceed capacity {c}", t1 + t2);
        assert!(t1 + b1 <= c, "L1 {} exceeds capacity {c}", t1 + b1);
        assert!(t2 + b2 <= 2 * c, "L2 {} exceeds 2c", t2 + b2);
        assert!(
            t1 + t2 + b1 + b2 <= 2 * c,
            "total state {} exceeds 2c",
            t1 + t2 + b1 + b2
        );
        assert!(self.p <= c, "target {} exceeds capacity {c}", self.p);
    }
}

impl<K, V> ReadOnlyCache<K, V> for ArcCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn contains(&self, key: &K) -> bool {
        self.t1.contains(key) || self.t2.contains(key)
    }

    fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for ArcCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        ArcCore::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        ArcCore::get(self, key)
    }

    fn clear(&mut self) {
        ArcCore::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for ArcCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        ArcCore::remove(self, key)
    }
}
