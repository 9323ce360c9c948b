pub use crate::concurrent::{ConcurrentArcCache, DebugList, DebugSnapshot};
pub use crate::ds::{GhostList, OrderedList};
pub use crate::error::{ConfigError, RegistryError};
pub use crate::metrics::ArcMetricsSnapshot;
pub use crate::policy::arc::ArcCore;
pub use crate::registry::{ArcHandle, CacheRegistry};
pub use crate::traits::{ConcurrentCache, CoreCache, MutableCache, ReadOnlyCache};
