//! Core domain for voltshell, the native shell around the VoltBetta web app.
//!
//! This crate decides which content source the embedded browser should show
//! (live server, bundled web app or offline page) and defines the ports the
//! host platform implements. It performs no I/O of its own.
#![deny(unused_crate_dependencies)]

pub mod bridge;
pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use bridge::{
    BRIDGE_PROTOCOL_VERSION, BridgeCall, BridgeCommand, BridgeError, BridgeInvocation,
    BridgeReply, BridgeRequest,
};
pub use domain::{
    ContentSource, FrameKind, NetworkAvailability, Notice, ReachabilityResult, ResolutionOutcome,
    ResolutionTrigger, UnreachableReason, classify_status,
};
pub use error::CoreError;
pub use events::ShellEvent;
pub use ports::{
    BundleLocatorPort, ConnectivityProbePort, HostActionsPort, HostError, NetworkStatusPort,
    NoopEmitter, PresentationSurface, ProbeTarget, ShellEventEmitter, StaticNetworkStatus,
};
pub use services::{
    ContentSourceResolver, LoadErrorDecision, Resolution, ResolverConfig, ShellSession,
};
pub use settings::{ShellSettings, ShellSettingsUpdate, SettingsError, validate_settings};
