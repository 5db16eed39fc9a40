//! Content source resolver: the three-tier fallback policy.
//!
//! Remote is probed first and exactly once per cycle. The bundled app is only
//! considered when the device has network but the server is unreachable. The
//! offline page terminates every other branch. The resolver holds no state
//! between calls and has no failure mode of its own.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{
    ContentSource, NetworkAvailability, Notice, ReachabilityResult, ResolutionOutcome,
};
use crate::ports::{BundleLocatorPort, ConnectivityProbePort, NetworkStatusPort, ProbeTarget};
use crate::settings::ShellSettings;

/// Resolver inputs taken from [`ShellSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub remote_url: String,
    pub bundled_app_path: String,
    pub offline_asset_path: String,
    pub probe_timeout: Duration,
    pub notify_on_missing_bundle: bool,
}

impl From<&ShellSettings> for ResolverConfig {
    fn from(settings: &ShellSettings) -> Self {
        Self {
            remote_url: settings.remote_url.clone(),
            bundled_app_path: settings.bundled_app_path.clone(),
            offline_asset_path: settings.offline_asset_path.clone(),
            probe_timeout: settings.probe_timeout(),
            notify_on_missing_bundle: settings.notify_on_missing_bundle,
        }
    }
}

/// A proactive resolution together with the probe verdict that drove it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reachability: ReachabilityResult,
    pub outcome: ResolutionOutcome,
}

/// Chooses between the remote server, the bundled app and the offline page.
pub struct ContentSourceResolver {
    config: ResolverConfig,
    probe: Arc<dyn ConnectivityProbePort>,
    network: Arc<dyn NetworkStatusPort>,
    bundles: Arc<dyn BundleLocatorPort>,
}

impl ContentSourceResolver {
    pub fn new(
        config: ResolverConfig,
        probe: Arc<dyn ConnectivityProbePort>,
        network: Arc<dyn NetworkStatusPort>,
        bundles: Arc<dyn BundleLocatorPort>,
    ) -> Self {
        Self {
            config,
            probe,
            network,
            bundles,
        }
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Probe target for the configured remote server.
    pub fn remote_target(&self) -> ProbeTarget {
        ProbeTarget::new(self.config.remote_url.clone(), self.config.probe_timeout)
    }

    /// Run a full proactive resolution cycle.
    pub async fn resolve(&self) -> ResolutionOutcome {
        self.resolve_detailed().await.outcome
    }

    /// Run a full proactive resolution cycle and keep the probe verdict.
    pub async fn resolve_detailed(&self) -> Resolution {
        let reachability = self.probe.probe(&self.remote_target()).await;
        let outcome = self.decide(&reachability);
        Resolution {
            reachability,
            outcome,
        }
    }

    /// Apply the fallback policy to a probe verdict.
    ///
    /// Network status and bundle presence are queried lazily, only on the
    /// branches that need them.
    pub fn decide(&self, reachability: &ReachabilityResult) -> ResolutionOutcome {
        if reachability.is_reachable() {
            info!(url = %self.config.remote_url, "Remote server reachable");
            return ResolutionOutcome::silent(ContentSource::remote(&self.config.remote_url));
        }

        debug!(url = %self.config.remote_url, %reachability, "Remote server unusable");

        match self.network.availability() {
            NetworkAvailability::Available => {
                if self.bundles.exists(&self.config.bundled_app_path) {
                    info!(path = %self.config.bundled_app_path, "Using bundled web app");
                    ResolutionOutcome::silent(ContentSource::bundled(
                        &self.config.bundled_app_path,
                    ))
                } else if self.config.notify_on_missing_bundle {
                    info!("Bundled web app missing, using offline page");
                    ResolutionOutcome::with_notice(
                        self.offline_source(),
                        Notice::server_unavailable(),
                    )
                } else {
                    info!("Bundled web app missing, using offline page");
                    ResolutionOutcome::silent(self.offline_source())
                }
            }
            NetworkAvailability::Unavailable => {
                info!("No network connection, using offline page");
                ResolutionOutcome::with_notice(self.offline_source(), Notice::no_network())
            }
        }
    }

    /// Outcome for a main-frame load failure: skip the remote tier entirely.
    pub fn fallback_after_load_failure(&self) -> ResolutionOutcome {
        ResolutionOutcome::with_notice(self.offline_source(), Notice::connection_issue())
    }

    fn offline_source(&self) -> ContentSource {
        ContentSource::offline(&self.config.offline_asset_path)
    }
}
