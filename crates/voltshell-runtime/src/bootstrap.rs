//! Shell bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together.
//! All concrete implementations are instantiated here:
//! - HTTP connectivity probe (reqwest)
//! - Network status (sysinfo, or pinned by settings)
//! - Filesystem bundle locator
//! - Host actions and event broadcaster
//!
//! Hosts receive a [`ShellContext`] and launch a shell around their surface.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use voltshell_core::ports::{
    HostActionsPort, NetworkStatusPort, PresentationSurface, ShellEventEmitter,
    StaticNetworkStatus,
};
use voltshell_core::{ContentSourceResolver, ResolverConfig, ShellSettings, validate_settings};

use crate::assets::FsBundleLocator;
use crate::events::BroadcastEmitter;
use crate::host::DefaultHostActions;
use crate::network::SystemNetworkStatus;
use crate::probe::HttpConnectivityProbe;
use crate::shell::{PresentationLoop, ShellDeps, ShellHandle, new_shell};

/// Fully composed shell infrastructure.
pub struct ShellContext {
    /// Settings the context was built from (already validated).
    pub settings: ShellSettings,
    /// The fallback policy.
    pub resolver: Arc<ContentSourceResolver>,
    /// Host facilities exposed through the bridge.
    pub host: Arc<dyn HostActionsPort>,
    /// Event broadcaster; subscribe before launching to see every event.
    pub events: Arc<BroadcastEmitter>,
}

impl ShellContext {
    /// Shared collaborators for a shell.
    pub fn deps(&self) -> ShellDeps {
        let emitter: Arc<dyn ShellEventEmitter> = Arc::clone(&self.events) as _;
        ShellDeps {
            resolver: Arc::clone(&self.resolver),
            host: Arc::clone(&self.host),
            emitter,
        }
    }

    /// Create a shell around the host's surface.
    pub fn launch<S: PresentationSurface>(&self, surface: S) -> (ShellHandle, PresentationLoop<S>) {
        new_shell(surface, self.deps())
    }
}

/// Bootstrap the shell from settings.
pub fn bootstrap(settings: ShellSettings) -> Result<ShellContext> {
    validate_settings(&settings)?;

    let probe = Arc::new(HttpConnectivityProbe::new(settings.probe_timeout())?);

    let network: Arc<dyn NetworkStatusPort> = match settings.network_override {
        Some(pinned) => {
            info!(network = ?pinned, "Network status pinned by settings");
            Arc::new(StaticNetworkStatus(pinned))
        }
        None => Arc::new(SystemNetworkStatus::new()),
    };

    let bundles = Arc::new(FsBundleLocator::new(settings.assets_dir.clone()));

    let resolver = Arc::new(ContentSourceResolver::new(
        ResolverConfig::from(&settings),
        probe,
        network,
        bundles,
    ));

    info!(
        remote_url = %settings.remote_url,
        assets_dir = %settings.assets_dir.display(),
        timeout_ms = settings.probe_timeout_ms,
        "Shell bootstrapped"
    );

    Ok(ShellContext {
        settings,
        resolver,
        host: Arc::new(DefaultHostActions::new()),
        events: Arc::new(BroadcastEmitter::new()),
    })
}
