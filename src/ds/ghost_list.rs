//! Recency list of keys without values, for ARC ghost tracking.
//!
//! `B1` and `B2` remember *which* keys were recently demoted from the
//! resident lists, not what they mapped to. A ghost hit (re-inserting a key
//! that is still remembered here) is the signal ARC's adaptation feeds on.
//!
//! Layered over [`OrderedList<K, ()>`](crate::ds::OrderedList): same rank
//! discipline, no value storage. Demoted keys get a fresh rank, so iteration
//! order is demotion order (oldest demotion first).
//!
//! Unlike a self-bounding history buffer, this list does not trim itself;
//! the ARC core pops the LRU ghost when the paper's ladder constraints
//! (`|T1| + |B1| ≤ c`, total ≤ `2c`) require it.

use std::hash::Hash;

use crate::ds::OrderedList;

/// Ordered set of recently demoted keys (no values).
///
/// # Example
///
/// ```
/// use arckit::ds::GhostList;
///
/// let mut ghost = GhostList::new();
/// ghost.record("evicted_1");
/// ghost.record("evicted_2");
///
/// assert!(ghost.contains(&"evicted_1"));
/// assert_eq!(ghost.pop_lru(), Some("evicted_1"));
///
/// // Ghost hit: the key is removed before re-entering the cache
/// assert!(ghost.remove(&"evicted_2"));
/// assert!(ghost.is_empty());
/// ```
#[derive(Debug)]
pub struct GhostList<K> {
    inner: OrderedList<K, ()>,
}

impl<K> Default for GhostList<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> GhostList<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty ghost list.
    pub fn new() -> Self {
        Self {
            inner: OrderedList::new(),
        }
    }

    /// Creates an empty ghost list with pre-sized key index.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: OrderedList::with_capacity(capacity),
        }
    }

    /// Returns the number of keys tracked.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if `key` is remembered. This is the ghost-hit check.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    /// Records `key` as just-demoted, at the MRU end under a fresh rank.
    ///
    /// Re-recording an already-tracked key moves it to the MRU end.
    pub fn record(&mut self, key: K) {
        self.inner.put_mru(key, ());
    }

    /// Removes and returns the oldest tracked key.
    pub fn pop_lru(&mut self) -> Option<K> {
        self.inner.pop_lru().map(|(key, ())| key)
    }

    /// Removes `key`; returns `true` if it was tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        self.inner.remove(key).is_some()
    }

    /// Iterates keys in demotion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.inner.iter().map(|(key, ())| key)
    }

    /// Clears all tracked keys.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self)
    where
        K: std::fmt::Debug,
    {
        self.inner.debug_validate_invariants();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_contains() {
        let mut ghost = GhostList::new();
        ghost.record("a");
        ghost.record("b");

        assert_eq!(ghost.len(), 2);
        assert!(ghost.contains(&"a"));
        assert!(ghost.contains(&"b"));
        assert!(!ghost.contains(&"c"));
        ghost.debug_validate_invariants();
    }

    #[test]
    fn pop_lru_is_demotion_order() {
        let mut ghost = GhostList::new();
        ghost.record(1);
        ghost.record(2);
        ghost.record(3);

        assert_eq!(ghost.pop_lru(), Some(1));
        assert_eq!(ghost.pop_lru(), Some(2));
        assert_eq!(ghost.pop_lru(), Some(3));
        assert_eq!(ghost.pop_lru(), None);
    }

    #[test]
    fn rerecord_moves_to_mru() {
        let mut ghost = GhostList::new();
        ghost.record("a");
        ghost.record("b");
        ghost.record("a");

        let order: Vec<_> = ghost.iter().copied().collect();
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(ghost.len(), 2);
        ghost.debug_validate_invariants();
    }

    #[test]
    fn remove_existing_and_missing() {
        let mut ghost = GhostList::new();
        ghost.record("a");

        assert!(ghost.remove(&"a"));
        assert!(!ghost.remove(&"a"));
        assert!(ghost.is_empty());
    }

    #[test]
    fn clear_resets_membership() {
        let mut ghost = GhostList::new();
        ghost.record(1);
        ghost.record(2);
        ghost.clear();

        assert!(ghost.is_empty());
        assert!(!ghost.contains(&1));
        ghost.debug_validate_invariants();
    }
}
