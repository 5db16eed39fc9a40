//! Host adapters and runtime for voltshell.
//!
//! Implements the core ports against real infrastructure (reqwest, sysinfo,
//! the filesystem) and runs the worker/presentation pair that drives a host
//! surface.
#![deny(unsafe_code)]

pub mod assets;
pub mod bootstrap;
pub mod events;
pub mod host;
pub mod network;
pub mod probe;
pub mod shell;

pub use assets::FsBundleLocator;
pub use bootstrap::{ShellContext, bootstrap};
pub use events::BroadcastEmitter;
pub use host::DefaultHostActions;
pub use network::SystemNetworkStatus;
pub use probe::HttpConnectivityProbe;
pub use shell::{PresentationLoop, ShellDeps, ShellHandle, new_shell};
