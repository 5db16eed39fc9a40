//! Scripted ports and a recording surface for shell tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;
use url::Url;
use voltshell_core::ports::{
    BundleLocatorPort, ConnectivityProbePort, HostActionsPort, HostError, PresentationSurface,
    ProbeTarget, ShellEventEmitter, StaticNetworkStatus,
};
use voltshell_core::{
    ContentSource, ContentSourceResolver, NetworkAvailability, ReachabilityResult,
    ResolverConfig, ShellEvent, ShellSettings, UnreachableReason,
};
use voltshell_runtime::{BroadcastEmitter, ShellDeps};

pub const DEVICE_INFO: &str = "voltshell/test (TestOS 1.0; test64)";

/// Returns queued verdicts in order, then `Unreachable(Timeout)`.
#[derive(Default)]
pub struct ScriptedProbe {
    script: Mutex<VecDeque<ReachabilityResult>>,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new(script: impl IntoIterator<Item = ReachabilityResult>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectivityProbePort for ScriptedProbe {
    async fn probe(&self, _target: &ProbeTarget) -> ReachabilityResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ReachabilityResult::unreachable(UnreachableReason::Timeout))
    }
}

/// Bundle locator with a fixed answer.
pub struct FixedBundles(pub bool);

impl BundleLocatorPort for FixedBundles {
    fn exists(&self, _relative_path: &str) -> bool {
        self.0
    }
}

/// Host that records opened links instead of launching anything.
#[derive(Default)]
pub struct FakeHost {
    pub opened: Mutex<Vec<String>>,
}

impl HostActionsPort for FakeHost {
    fn open_external_link(&self, url: &Url) -> Result<(), HostError> {
        if url.host_str() == Some("refused.invalid") {
            return Err(HostError::OpenLink {
                url: url.to_string(),
                reason: "no handler".to_string(),
            });
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn device_info(&self) -> String {
        DEVICE_INFO.to_string()
    }
}

/// Surface that remembers everything it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub loads: Vec<ContentSource>,
    pub notices: Vec<String>,
}

impl PresentationSurface for RecordingSurface {
    fn load(&mut self, source: &ContentSource) {
        self.loads.push(source.clone());
    }

    fn notify_user(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Everything a shell test needs, with handles kept for assertions.
pub struct Harness {
    pub probe: Arc<ScriptedProbe>,
    pub host: Arc<FakeHost>,
    pub events: Arc<BroadcastEmitter>,
    pub deps: ShellDeps,
}

impl Harness {
    pub fn new(
        script: impl IntoIterator<Item = ReachabilityResult>,
        network: NetworkAvailability,
        bundle_exists: bool,
    ) -> Self {
        let probe = Arc::new(ScriptedProbe::new(script));
        let host = Arc::new(FakeHost::default());
        let events = Arc::new(BroadcastEmitter::new());

        let resolver = Arc::new(ContentSourceResolver::new(
            ResolverConfig::from(&ShellSettings::default()),
            Arc::clone(&probe) as Arc<dyn ConnectivityProbePort>,
            Arc::new(StaticNetworkStatus(network)),
            Arc::new(FixedBundles(bundle_exists)),
        ));

        let deps = ShellDeps {
            resolver,
            host: Arc::clone(&host) as Arc<dyn HostActionsPort>,
            emitter: Arc::clone(&events) as Arc<dyn ShellEventEmitter>,
        };

        Self {
            probe,
            host,
            events,
            deps,
        }
    }
}

/// Wait for the next event matching `pred`, failing after five seconds.
pub async fn wait_for(
    rx: &mut broadcast::Receiver<ShellEvent>,
    pred: impl Fn(&ShellEvent) -> bool,
) -> ShellEvent {
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for shell event")
            .expect("event channel closed");
        if pred(&event) {
            return event;
        }
    }
}
