//! The presentation loop: sole owner of the rendering surface.
//!
//! Runs on the thread that owns the host surface. Outcomes from the worker,
//! load errors, retries and bridge calls are all funnelled through one queue
//! and handled in order, so the fallback guard needs no synchronisation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use voltshell_core::bridge::{self, BridgeCommand, BridgeError, BridgeReply};
use voltshell_core::ports::{HostActionsPort, PresentationSurface, ShellEventEmitter};
use voltshell_core::{
    ContentSourceResolver, FrameKind, LoadErrorDecision, ResolutionOutcome, ResolutionTrigger,
    ShellEvent, ShellSession,
};

use super::handle::{PresentationMessage, ShellHandle};
use super::worker::ResolutionWorker;

/// Shared collaborators of a running shell.
#[derive(Clone)]
pub struct ShellDeps {
    pub resolver: Arc<ContentSourceResolver>,
    pub host: Arc<dyn HostActionsPort>,
    pub emitter: Arc<dyn ShellEventEmitter>,
}

/// Drives a [`PresentationSurface`] from resolution outcomes and host callbacks.
pub struct PresentationLoop<S: PresentationSurface> {
    surface: S,
    session: ShellSession,
    deps: ShellDeps,
    inbox: mpsc::UnboundedReceiver<PresentationMessage>,
    handle: ShellHandle,
}

/// Create a shell around `surface`.
///
/// Nothing runs until [`PresentationLoop::run`] is awaited; the returned
/// handle may be cloned and used from any thread before or after that.
pub fn new_shell<S: PresentationSurface>(
    surface: S,
    deps: ShellDeps,
) -> (ShellHandle, PresentationLoop<S>) {
    let (tx, inbox) = mpsc::unbounded_channel();
    let handle = ShellHandle::new(tx);
    let shell = PresentationLoop {
        surface,
        session: ShellSession::new(),
        deps,
        inbox,
        handle: handle.clone(),
    };
    (handle, shell)
}

impl<S: PresentationSurface> PresentationLoop<S> {
    /// Activate, then process messages until shutdown.
    ///
    /// Spawns the resolution worker on the current tokio runtime. Returns the
    /// surface once the loop stops.
    pub async fn run(mut self) -> S {
        let (requests, request_rx) = mpsc::unbounded_channel();
        let worker = ResolutionWorker::new(
            Arc::clone(&self.deps.resolver),
            Arc::clone(&self.deps.emitter),
            request_rx,
            self.handle.clone(),
        );
        tokio::spawn(worker.run());

        self.activate(&requests);

        while let Some(message) = self.inbox.recv().await {
            match message {
                PresentationMessage::Activate => self.activate(&requests),
                PresentationMessage::Resolved { trigger, outcome } => self.apply(trigger, outcome),
                PresentationMessage::LoadError { frame, detail } => {
                    self.handle_load_error(frame, &detail);
                }
                PresentationMessage::CheckConnection => {
                    self.request_resolution(&requests, ResolutionTrigger::Retry);
                }
                PresentationMessage::Bridge { payload, reply } => {
                    let answer = self.handle_bridge(&payload, &requests);
                    if reply.send(answer).is_err() {
                        debug!("Bridge caller went away before the reply");
                    }
                }
                PresentationMessage::Shutdown => break,
            }
        }

        info!("Presentation loop stopped");
        self.surface
    }

    fn activate(&mut self, requests: &mpsc::UnboundedSender<ResolutionTrigger>) {
        self.session.activate();
        self.request_resolution(requests, ResolutionTrigger::Activation);
    }

    fn request_resolution(
        &self,
        requests: &mpsc::UnboundedSender<ResolutionTrigger>,
        trigger: ResolutionTrigger,
    ) {
        debug!(%trigger, "Requesting resolution");
        self.deps
            .emitter
            .emit(ShellEvent::ResolutionStarted { trigger });
        if requests.send(trigger).is_err() {
            warn!(%trigger, "Resolution worker is not running");
        }
    }

    fn apply(&mut self, trigger: ResolutionTrigger, outcome: ResolutionOutcome) {
        info!(%trigger, source = %outcome.source, "Loading content source");
        self.surface.load(&outcome.source);
        if let Some(notice) = &outcome.notice {
            self.surface.notify_user(notice.as_str());
        }
        self.session.record_applied(&outcome.source);
        self.deps
            .emitter
            .emit(ShellEvent::SourceResolved { trigger, outcome });
    }

    fn handle_load_error(&mut self, frame: FrameKind, detail: &str) {
        debug!(
            ?frame,
            detail,
            current = ?self.session.current(),
            "Load error reported"
        );
        match self.session.on_load_error(frame, &self.deps.resolver) {
            LoadErrorDecision::Fallback(outcome) => {
                warn!(detail, "Main frame failed to load, falling back");
                self.deps.emitter.emit(ShellEvent::FallbackTaken {
                    outcome: outcome.clone(),
                });
                self.apply(ResolutionTrigger::LoadFailure, outcome);
            }
            LoadErrorDecision::Suppressed => {
                self.deps.emitter.emit(ShellEvent::FallbackSuppressed {
                    detail: detail.to_string(),
                });
            }
            LoadErrorDecision::Ignored => {}
        }
    }

    fn handle_bridge(
        &mut self,
        payload: &str,
        requests: &mpsc::UnboundedSender<ResolutionTrigger>,
    ) -> BridgeReply {
        let invocation = bridge::decode(payload);
        let id = invocation.id;

        let (operation, reply) = match invocation.command {
            Ok(command) => {
                let operation = command.operation();
                (operation, self.execute(command, id, requests))
            }
            Err(e) => {
                warn!(error = %e, "Rejected bridge call");
                ("invalid", BridgeReply::error(id, &e))
            }
        };

        self.deps.emitter.emit(ShellEvent::BridgeCalled {
            operation: operation.to_string(),
            ok: reply.is_ok(),
        });
        reply
    }

    fn execute(
        &mut self,
        command: BridgeCommand,
        id: Option<u64>,
        requests: &mpsc::UnboundedSender<ResolutionTrigger>,
    ) -> BridgeReply {
        match command {
            BridgeCommand::ShowToast(message) => {
                self.surface.notify_user(&message);
                BridgeReply::done(id)
            }
            BridgeCommand::OpenExternalLink(url) => match self.deps.host.open_external_link(&url) {
                Ok(()) => BridgeReply::done(id),
                Err(e) => BridgeReply::error(id, &BridgeError::from(e)),
            },
            BridgeCommand::GetDeviceInfo => BridgeReply::value(id, self.deps.host.device_info()),
            BridgeCommand::CheckServerConnection => {
                self.request_resolution(requests, ResolutionTrigger::Retry);
                BridgeReply::done(id)
            }
        }
    }
}
