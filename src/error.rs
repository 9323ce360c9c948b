//! Error types for the arckit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: invalid construction parameters (e.g. zero capacity).
//! - [`RegistryError`]: registry-boundary failures: unknown instance names,
//!   duplicate registrations, or a nested configuration error.
//!
//! Absence (a `get` miss, removing a key that is not cached, updating a
//! non-member) is a normal return everywhere in this crate, never an error.
//! The cache core itself is total over well-formed input; these types only
//! appear at construction and registry boundaries.
//!
//! ## Example Usage
//!
//! ```
//! use arckit::error::ConfigError;
//! use arckit::policy::arc::ArcCore;
//!
//! let cache: Result<ArcCore<u64, String>, ConfigError> = ArcCore::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = ArcCore::<u64, String>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`ArcCore::try_new`](crate::policy::arc::ArcCore::try_new) and by
/// [`CacheRegistry::create`](crate::registry::CacheRegistry::create).
/// Carries a human-readable description of which parameter failed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

/// Error returned by registry operations on named cache instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No instance is registered under the given name.
    UnknownInstance(String),
    /// An instance is already registered under the given name.
    AlreadyRegistered(String),
    /// The instance could not be constructed.
    InvalidConfig(ConfigError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownInstance(name) => {
                write!(f, "no cache instance registered as {name:?}")
            }
            RegistryError::AlreadyRegistered(name) => {
                write!(f, "cache instance {name:?} is already registered")
            }
            RegistryError::InvalidConfig(err) => write!(f, "invalid cache config: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for RegistryError {
    fn from(err: ConfigError) -> Self {
        RegistryError::InvalidConfig(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
        assert_eq!(err.message(), "capacity must be > 0");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn registry_display_names_the_instance() {
        let err = RegistryError::UnknownInstance("sessions".to_string());
        assert!(err.to_string().contains("sessions"));

        let err = RegistryError::AlreadyRegistered("sessions".to_string());
        assert!(err.to_string().contains("already"));
    }

    #[test]
    fn registry_wraps_config_error() {
        let err: RegistryError = ConfigError::new("capacity must be > 0").into();
        assert!(err.to_string().contains("capacity"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
        assert_error::<RegistryError>();
    }
}
