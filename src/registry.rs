//! Named-instance registry for cache handles.
//!
//! Hosts that manage several caches register each under a name and pass
//! handles around instead of concrete cache values. A handle is shared
//! ownership of one [`ConcurrentArcCache`]: destroying the name only
//! unregisters it; outstanding handles keep working, and the instance is
//! dropped when the last one goes away.
//!
//! ```text
//!   create("sessions", 512) ──► registry ──► ArcHandle ──┐
//!   handle("sessions") ────────► (by name) ─► ArcHandle ─┼──► same instance
//!   destroy("sessions")  unregisters the name            │
//!                        existing handles stay usable ◄──┘
//! ```
//!
//! Unknown names and duplicate registrations fail fast with
//! [`RegistryError`]; capacity validation happens here too, so a
//! misconfigured instance never becomes reachable.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::concurrent::ConcurrentArcCache;
use crate::error::RegistryError;

/// Shared handle to one named cache instance.
pub type ArcHandle<K, V> = Arc<ConcurrentArcCache<K, V>>;

/// Owning registry of named cache instances.
///
/// # Example
///
/// ```
/// use arckit::registry::CacheRegistry;
///
/// let registry: CacheRegistry<u64, String> = CacheRegistry::new();
/// let cache = registry.create("sessions", 512).unwrap();
/// cache.insert(1, "alice".to_string());
///
/// // Another part of the host looks the instance up by name
/// let same = registry.handle("sessions").unwrap();
/// assert_eq!(same.peek(&1), Some("alice".to_string()));
/// ```
#[derive(Debug)]
pub struct CacheRegistry<K, V>
where
    K: Eq + Hash + Clone,
{
    instances: RwLock<FxHashMap<String, ArcHandle<K, V>>>,
}

impl<K, V> Default for CacheRegistry<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CacheRegistry<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(FxHashMap::default()),
        }
    }

    /// Creates and registers a new cache instance under `name`.
    ///
    /// Fails fast on a zero capacity or an already-registered name; the
    /// check and the registration happen under one write lock, so two
    /// racing creators cannot both succeed.
    pub fn create(
        &self,
        name: impl Into<String>,
        capacity: usize,
    ) -> Result<ArcHandle<K, V>, RegistryError> {
        let name = name.into();
        let mut instances = self.instances.write();
        if instances.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        let cache = Arc::new(ConcurrentArcCache::try_new(name.clone(), capacity)?);
        instances.insert(name, Arc::clone(&cache));
        Ok(cache)
    }

    /// Returns a handle to the instance registered under `name`.
    pub fn handle(&self, name: &str) -> Result<ArcHandle<K, V>, RegistryError> {
        self.instances
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownInstance(name.to_string()))
    }

    /// Unregisters `name`. Returns `false` if it was not registered.
    ///
    /// Handles already held keep working; new lookups fail.
    pub fn destroy(&self, name: &str) -> bool {
        self.instances.write().remove(name).is_some()
    }

    /// Returns the registered names, unordered.
    pub fn names(&self) -> Vec<String> {
        self.instances.read().keys().cloned().collect()
    }

    /// Returns the number of registered instances.
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    /// Returns `true` if no instances are registered.
    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn create_and_lookup() {
        let registry: CacheRegistry<u64, &str> = CacheRegistry::new();
        let cache = registry.create("pages", 16).unwrap();
        cache.insert(1, "one");

        let found = registry.handle("pages").unwrap();
        assert_eq!(found.peek(&1), Some("one"));
        assert_eq!(found.name(), "pages");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_name_fails_fast() {
        let registry: CacheRegistry<u64, &str> = CacheRegistry::new();
        match registry.handle("nope") {
            Err(RegistryError::UnknownInstance(name)) => assert_eq!(name, "nope"),
            other => panic!("expected UnknownInstance, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let registry: CacheRegistry<u64, &str> = CacheRegistry::new();
        registry.create("pages", 16).unwrap();
        match registry.create("pages", 32) {
            Err(RegistryError::AlreadyRegistered(name)) => assert_eq!(name, "pages"),
            other => panic!("expected AlreadyRegistered, got {other:?}"),
        }
    }

    #[test]
    fn zero_capacity_is_rejected_and_not_registered() {
        let registry: CacheRegistry<u64, &str> = CacheRegistry::new();
        assert!(matches!(
            registry.create("bad", 0),
            Err(RegistryError::InvalidConfig(_))
        ));
        assert!(registry.is_empty());
        assert!(registry.handle("bad").is_err());
    }

    #[test]
    fn destroy_unregisters_but_keeps_live_handles() {
        let registry: CacheRegistry<u64, &str> = CacheRegistry::new();
        let cache = registry.create("pages", 16).unwrap();
        cache.insert(1, "one");

        assert!(registry.destroy("pages"));
        assert!(!registry.destroy("pages"));
        assert!(registry.handle("pages").is_err());

        // The held handle still works
        assert_eq!(cache.peek(&1), Some("one"));
    }

    #[test]
    fn names_lists_registrations() {
        let registry: CacheRegistry<u64, &str> = CacheRegistry::new();
        registry.create("a", 4).unwrap();
        registry.create("b", 4).unwrap();

        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }
}
