//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from the host and the
//! network. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No reqwest, sysinfo or filesystem types in any signature
//! - Probe ports are total: failures are values, not errors
//! - The presentation surface is driven from its owning thread only

pub mod event_emitter;
pub mod network;
pub mod probe;
pub mod surface;

pub use event_emitter::{NoopEmitter, ShellEventEmitter};
pub use network::{BundleLocatorPort, NetworkStatusPort, StaticNetworkStatus};
pub use probe::{ConnectivityProbePort, ProbeTarget};
pub use surface::{HostActionsPort, HostError, PresentationSurface};

#[cfg(test)]
pub use network::{MockBundleLocatorPort, MockNetworkStatusPort};
#[cfg(test)]
pub use probe::MockConnectivityProbePort;
