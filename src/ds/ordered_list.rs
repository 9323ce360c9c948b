//! Rank-ordered key/value list with O(log n) membership.
//!
//! The building block for ARC's four lists. Every entry carries an
//! *insertion rank*, a strictly increasing `u64` assigned when the entry is
//! (re-)inserted at the MRU end. Two coordinated indices are maintained:
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                        OrderedList Layout                             │
//! │                                                                       │
//! │   ┌──────────────────────────────┐   ┌────────────────────────────┐   │
//! │   │ by_key: FxHashMap<K, Slot>   │   │ by_rank: BTreeMap<u64, K>  │   │
//! │   │                              │   │                            │   │
//! │   │  ┌─────────┬──────────────┐  │   │   rank 3 ──► "key_a"       │   │
//! │   │  │   Key   │ (rank, value)│  │   │   rank 7 ──► "key_b"       │   │
//! │   │  ├─────────┼──────────────┤  │   │   rank 9 ──► "key_c"       │   │
//! │   │  │ "key_a" │ (3, v_a)     │  │   │     ▲              ▲       │   │
//! │   │  │ "key_b" │ (7, v_b)     │  │   │     │              │       │   │
//! │   │  │ "key_c" │ (9, v_c)     │  │   │    LRU            MRU      │   │
//! │   │  └─────────┴──────────────┘  │   │  (smallest)    (largest)   │   │
//! │   └──────────────────────────────┘   └────────────────────────────┘   │
//! │                                                                       │
//! │   put_mru("key_a", v) when present:                                   │
//! │     1. remove old rank 3 from by_rank                                 │
//! │     2. assign fresh rank 10 (counter never recycles)                  │
//! │     3. by_rank[10] = "key_a"; by_key["key_a"] = (10, v)               │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation   | Description                                | Complexity |
//! |-------------|--------------------------------------------|------------|
//! | `get`       | Value lookup, rank untouched               | O(1) avg   |
//! | `put_mru`   | Insert/reinsert at MRU with a fresh rank   | O(log n)   |
//! | `update`    | Replace value in place, rank preserved     | O(1) avg   |
//! | `touch`     | Reassign a fresh rank, value untouched     | O(log n)   |
//! | `pop_lru`   | Remove the smallest-rank entry             | O(log n)   |
//! | `remove`    | Remove by key                              | O(log n)   |
//! | `iter`      | LRU → MRU ordered walk                     | O(n log n) |
//!
//! ## Implementation Notes
//!
//! - The rank counter is per-list and never recycles; `u64` outlives any
//!   realistic workload.
//! - `by_key` and `by_rank` form a bijection: every key maps to exactly one
//!   rank and back. `debug_validate_invariants` checks this in test/debug
//!   builds.
//! - "MRU" always denotes the maximum rank, "LRU" the minimum.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Per-entry bookkeeping: the entry's current rank and its value.
#[derive(Debug, Clone)]
struct Slot<V> {
    rank: u64,
    value: V,
}

/// Recency-ordered key/value container backed by two coordinated indices.
///
/// Entries are ordered by insertion rank; re-inserting an existing key via
/// [`put_mru`](OrderedList::put_mru) moves it to the MRU end under a fresh
/// rank. Used for ARC's resident lists (`T1`, `T2`) and, through
/// [`GhostList`](crate::ds::GhostList), its ghost lists.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Eq + Hash + Clone` (the rank index stores a
///   second copy of each key)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use arckit::ds::OrderedList;
///
/// let mut list = OrderedList::new();
/// list.put_mru("a", 1);
/// list.put_mru("b", 2);
///
/// // "a" is the oldest entry
/// assert_eq!(list.peek_lru(), Some((&"a", &1)));
///
/// // Re-inserting moves it to the MRU end
/// list.put_mru("a", 10);
/// assert_eq!(list.peek_lru(), Some((&"b", &2)));
/// assert_eq!(list.pop_lru(), Some(("b", 2)));
/// assert_eq!(list.pop_lru(), Some(("a", 10)));
/// assert_eq!(list.pop_lru(), None);
/// ```
#[derive(Debug)]
pub struct OrderedList<K, V> {
    by_key: FxHashMap<K, Slot<V>>,
    by_rank: BTreeMap<u64, K>,
    next_rank: u64,
}

impl<K, V> Default for OrderedList<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedList<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            by_key: FxHashMap::default(),
            by_rank: BTreeMap::new(),
            next_rank: 0,
        }
    }

    /// Creates an empty list with pre-sized key index.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::ds::OrderedList;
    ///
    /// let list: OrderedList<u64, String> = OrderedList::with_capacity(128);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_key: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            by_rank: BTreeMap::new(),
            next_rank: 0,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    /// Returns a reference to the value for `key`, leaving its rank alone.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::ds::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.put_mru(1, "one");
    /// assert_eq!(list.get(&1), Some(&"one"));
    /// assert_eq!(list.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.by_key.get(key).map(|slot| &slot.value)
    }

    /// Returns the current rank of `key`, if present.
    pub fn rank_of(&self, key: &K) -> Option<u64> {
        self.by_key.get(key).map(|slot| slot.rank)
    }

    /// Inserts `key` at the MRU end under a fresh rank.
    ///
    /// If the key is already present its old position is discarded first; the
    /// fresh rank is strictly greater than every rank ever assigned by this
    /// list.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::ds::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.put_mru("a", 1);
    /// list.put_mru("b", 2);
    /// list.put_mru("a", 3); // re-ranked, now MRU
    ///
    /// let order: Vec<_> = list.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(order, vec![("b", 2), ("a", 3)]);
    /// ```
    pub fn put_mru(&mut self, key: K, value: V) {
        let rank = self.fresh_rank();
        if let Some(slot) = self.by_key.get_mut(&key) {
            self.by_rank.remove(&slot.rank);
            slot.rank = rank;
            slot.value = value;
        } else {
            self.by_key.insert(key.clone(), Slot { rank, value });
        }
        self.by_rank.insert(rank, key);
    }

    /// Replaces the value for `key` in place, preserving its rank.
    ///
    /// Returns `true` if the key was present.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::ds::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.put_mru("a", 1);
    /// list.put_mru("b", 2);
    ///
    /// assert!(list.update(&"a", 10));
    /// assert!(!list.update(&"missing", 0));
    ///
    /// // "a" kept its LRU position
    /// assert_eq!(list.peek_lru(), Some((&"a", &10)));
    /// ```
    pub fn update(&mut self, key: &K, value: V) -> bool {
        match self.by_key.get_mut(key) {
            Some(slot) => {
                slot.value = value;
                true
            }
            None => false,
        }
    }

    /// Reassigns a fresh rank to `key`, keeping its value.
    ///
    /// Returns `true` if the key was present.
    pub fn touch(&mut self, key: &K) -> bool {
        let rank = self.fresh_rank();
        match self.by_key.get_mut(key) {
            Some(slot) => {
                self.by_rank.remove(&slot.rank);
                slot.rank = rank;
                self.by_rank.insert(rank, key.clone());
                true
            }
            None => false,
        }
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.by_key.remove(key)?;
        self.by_rank.remove(&slot.rank);
        Some(slot.value)
    }

    /// Removes and returns the entry with the smallest rank.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::ds::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// assert_eq!(list.pop_lru(), None);
    ///
    /// list.put_mru(1, "one");
    /// list.put_mru(2, "two");
    /// assert_eq!(list.pop_lru(), Some((1, "one")));
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (_, key) = self.by_rank.pop_first()?;
        let slot = self.by_key.remove(&key)?;
        Some((key, slot.value))
    }

    /// Peeks at the smallest-rank entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let (_, key) = self.by_rank.first_key_value()?;
        self.by_key.get(key).map(|slot| (key, &slot.value))
    }

    /// Iterates entries in LRU → MRU order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.by_rank
            .values()
            .filter_map(move |key| self.by_key.get(key).map(|slot| (key, &slot.value)))
    }

    /// Removes all entries. The rank counter is not reset.
    pub fn clear(&mut self) {
        self.by_key.clear();
        self.by_rank.clear();
    }

    fn fresh_rank(&mut self) -> u64 {
        let rank = self.next_rank;
        self.next_rank += 1;
        rank
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self)
    where
        K: std::fmt::Debug,
    {
        assert_eq!(self.by_key.len(), self.by_rank.len());
        for (key, slot) in &self.by_key {
            assert!(slot.rank < self.next_rank);
            assert_eq!(self.by_rank.get(&slot.rank), Some(key));
        }
        for (rank, key) in &self.by_rank {
            let slot = self.by_key.get(key);
            assert!(slot.is_some(), "by_rank key missing in by_key");
            assert_eq!(slot.map(|s| s.rank), Some(*rank));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        let list: OrderedList<u32, &str> = OrderedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.peek_lru(), None);
    }

    #[test]
    fn put_and_get() {
        let mut list = OrderedList::new();
        list.put_mru(1, "one");
        list.put_mru(2, "two");

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&1), Some(&"one"));
        assert_eq!(list.get(&2), Some(&"two"));
        assert_eq!(list.get(&3), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn reinsert_moves_to_mru() {
        let mut list = OrderedList::new();
        list.put_mru("a", 1);
        list.put_mru("b", 2);
        list.put_mru("c", 3);

        list.put_mru("a", 4);

        let order: Vec<_> = list.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(list.get(&"a"), Some(&4));
        list.debug_validate_invariants();
    }

    #[test]
    fn update_preserves_rank() {
        let mut list = OrderedList::new();
        list.put_mru("a", 1);
        list.put_mru("b", 2);

        let rank_before = list.rank_of(&"a");
        assert!(list.update(&"a", 10));
        assert_eq!(list.rank_of(&"a"), rank_before);
        assert_eq!(list.peek_lru(), Some((&"a", &10)));

        assert!(!list.update(&"zzz", 0));
        list.debug_validate_invariants();
    }

    #[test]
    fn touch_reranks_without_value_change() {
        let mut list = OrderedList::new();
        list.put_mru("a", 1);
        list.put_mru("b", 2);

        assert!(list.touch(&"a"));
        let order: Vec<_> = list.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(order, vec![("b", 2), ("a", 1)]);

        assert!(!list.touch(&"zzz"));
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_lru_order() {
        let mut list = OrderedList::new();
        list.put_mru(1, "one");
        list.put_mru(2, "two");
        list.put_mru(3, "three");

        assert_eq!(list.pop_lru(), Some((1, "one")));
        assert_eq!(list.pop_lru(), Some((2, "two")));
        assert_eq!(list.pop_lru(), Some((3, "three")));
        assert_eq!(list.pop_lru(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_existing_and_missing() {
        let mut list = OrderedList::new();
        list.put_mru(1, "one");
        list.put_mru(2, "two");

        assert_eq!(list.remove(&1), Some("one"));
        assert_eq!(list.remove(&1), None);
        assert_eq!(list.len(), 1);
        assert!(!list.contains(&1));
        list.debug_validate_invariants();
    }

    #[test]
    fn ranks_strictly_increase_across_clear() {
        let mut list = OrderedList::new();
        list.put_mru("a", 1);
        let first = list.rank_of(&"a").unwrap();
        list.clear();

        list.put_mru("a", 2);
        let second = list.rank_of(&"a").unwrap();
        assert!(second > first, "rank counter must never recycle");
    }

    #[test]
    fn iter_is_lru_to_mru() {
        let mut list = OrderedList::new();
        for i in 0..5 {
            list.put_mru(i, i * 10);
        }
        let keys: Vec<_> = list.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
    }
}
