//! Network status and bundled-asset ports.

use crate::domain::NetworkAvailability;

/// Port for the host's network-state service.
///
/// Queried fresh on every resolution; implementations must not cache.
#[cfg_attr(test, mockall::automock)]
pub trait NetworkStatusPort: Send + Sync {
    fn availability(&self) -> NetworkAvailability;
}

/// Port for looking up assets shipped with the host package.
#[cfg_attr(test, mockall::automock)]
pub trait BundleLocatorPort: Send + Sync {
    /// Whether a regular file exists at `relative_path` under the asset root.
    fn exists(&self, relative_path: &str) -> bool;
}

/// A network status pinned to one value.
///
/// Used when configuration overrides the system, and in tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticNetworkStatus(pub NetworkAvailability);

impl NetworkStatusPort for StaticNetworkStatus {
    fn availability(&self) -> NetworkAvailability {
        self.0
    }
}
