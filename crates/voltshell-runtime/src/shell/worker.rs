//! Background resolution worker.
//!
//! A single task that probes and resolves one cycle at a time. Requests that
//! pile up while a probe is in flight are coalesced into the next cycle, so
//! at most one probe is ever outstanding. The coalesced cycle is labelled
//! with the strongest pending trigger.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info};
use voltshell_core::ports::ShellEventEmitter;
use voltshell_core::{ContentSourceResolver, ResolutionTrigger, ShellEvent};

use super::handle::{PresentationMessage, ShellHandle};

pub(crate) struct ResolutionWorker {
    resolver: Arc<ContentSourceResolver>,
    emitter: Arc<dyn ShellEventEmitter>,
    requests: mpsc::UnboundedReceiver<ResolutionTrigger>,
    presentation: ShellHandle,
}

impl ResolutionWorker {
    pub(crate) fn new(
        resolver: Arc<ContentSourceResolver>,
        emitter: Arc<dyn ShellEventEmitter>,
        requests: mpsc::UnboundedReceiver<ResolutionTrigger>,
        presentation: ShellHandle,
    ) -> Self {
        Self {
            resolver,
            emitter,
            requests,
            presentation,
        }
    }

    /// Run until the request channel closes or the presentation loop is gone.
    pub(crate) async fn run(mut self) {
        while let Some(mut trigger) = self.requests.recv().await {
            while let Ok(next) = self.requests.try_recv() {
                debug!(pending = %trigger, queued = %next, "Coalescing resolution requests");
                trigger = trigger.merge(next);
            }

            let started = Instant::now();
            let resolution = self.resolver.resolve_detailed().await;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            self.emitter.emit(ShellEvent::ProbeCompleted {
                url: self.resolver.config().remote_url.clone(),
                result: resolution.reachability,
                elapsed_ms,
            });

            let posted = self.presentation.post(PresentationMessage::Resolved {
                trigger,
                outcome: resolution.outcome,
            });
            if posted.is_err() {
                debug!("Presentation loop gone, stopping resolution worker");
                break;
            }
        }
        info!("Resolution worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use voltshell_core::ports::{
        ConnectivityProbePort, NoopEmitter, ProbeTarget, StaticNetworkStatus,
    };
    use voltshell_core::{NetworkAvailability, ReachabilityResult, ResolverConfig, ShellSettings};

    use super::*;
    use crate::assets::FsBundleLocator;

    #[derive(Default)]
    struct CountingProbe(AtomicUsize);

    #[async_trait]
    impl ConnectivityProbePort for CountingProbe {
        async fn probe(&self, _target: &ProbeTarget) -> ReachabilityResult {
            self.0.fetch_add(1, Ordering::SeqCst);
            ReachabilityResult::Reachable
        }
    }

    #[tokio::test]
    async fn test_queued_requests_share_one_cycle_with_strongest_trigger() {
        let probe = Arc::new(CountingProbe::default());
        let resolver = Arc::new(ContentSourceResolver::new(
            ResolverConfig::from(&ShellSettings::default()),
            Arc::clone(&probe) as Arc<dyn ConnectivityProbePort>,
            Arc::new(StaticNetworkStatus(NetworkAvailability::Available)),
            Arc::new(FsBundleLocator::new("/nonexistent")),
        ));

        let (requests, request_rx) = mpsc::unbounded_channel();
        let (tx, mut inbox) = mpsc::unbounded_channel();
        let worker = ResolutionWorker::new(
            resolver,
            Arc::new(NoopEmitter),
            request_rx,
            ShellHandle::new(tx),
        );

        // Everything is queued before the worker first looks at the channel.
        requests.send(ResolutionTrigger::Retry).unwrap();
        requests.send(ResolutionTrigger::Activation).unwrap();
        requests.send(ResolutionTrigger::Retry).unwrap();
        drop(requests);
        worker.run().await;

        let Some(PresentationMessage::Resolved { trigger, .. }) = inbox.recv().await else {
            panic!("expected a resolved outcome");
        };
        assert_eq!(trigger, ResolutionTrigger::Activation);
        assert!(inbox.try_recv().is_err());
        assert_eq!(probe.0.load(Ordering::SeqCst), 1);
    }
}
