//! # Cache Trait Hierarchy
//!
//! Small, composable traits separating read-only inspection, core cache
//! operations, and arbitrary removal, so generic code can ask for exactly
//! the capability it needs.
//!
//! ## Architecture
//!
//! ```text
//!            ┌──────────────────────────────────┐
//!            │       ReadOnlyCache<K, V>        │
//!            │                                  │
//!            │  contains(&, &K) → bool          │
//!            │  len(&) → usize                  │
//!            │  is_empty(&) → bool              │
//!            │  capacity(&) → usize             │
//!            └─────────────────┬────────────────┘
//!                              │
//!            ┌─────────────────▼────────────────┐
//!            │        CoreCache<K, V>           │
//!            │                                  │
//!            │  insert(&mut, K, V) → Option<V>  │
//!            │  get(&mut, &K) → Option<&V>      │
//!            │  clear(&mut)                     │
//!            └─────────────────┬────────────────┘
//!                              │
//!            ┌─────────────────▼────────────────┐
//!            │       MutableCache<K, V>         │
//!            │                                  │
//!            │  remove(&mut, &K) → Option<V>    │
//!            └──────────────────────────────────┘
//!
//!   ConcurrentCache: Send + Sync marker for thread-safe wrappers.
//! ```
//!
//! `get` takes `&mut self` throughout: an adaptive cache updates recency
//! and promotion state on every touching lookup. Use
//! [`ReadOnlyCache::contains`], or a concrete type's `peek`, when the
//! eviction state must not move.

/// Read-only cache inspection.
pub trait ReadOnlyCache<K, V> {
    /// Checks if a key is resident without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of resident entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no resident entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of resident entries.
    fn capacity(&self) -> usize;
}

/// Core operations every cache supports.
///
/// # Example
///
/// ```
/// use arckit::policy::arc::ArcCore;
/// use arckit::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = ArcCore::new(100);
/// warm(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// was resident.
    ///
    /// May evict an existing entry according to the cache's replacement
    /// policy.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Touching lookup: returns the value and records the access.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches supporting arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was resident.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Marker trait for caches that are safe to share across threads.
///
/// Implementors guarantee internally synchronized operations; the single
/// threaded cores do not carry this marker and must be wrapped.
pub trait ConcurrentCache: Send + Sync {}
