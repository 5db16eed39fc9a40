//! Cloneable handle for posting work to the presentation loop.

use tokio::sync::{mpsc, oneshot};
use voltshell_core::{BridgeReply, CoreError, FrameKind, ResolutionOutcome, ResolutionTrigger};

/// Messages processed by the presentation loop, in arrival order.
#[derive(Debug)]
pub(crate) enum PresentationMessage {
    /// Fresh activation: reset the fallback guard and resolve.
    Activate,
    /// The worker finished a resolution cycle.
    Resolved {
        trigger: ResolutionTrigger,
        outcome: ResolutionOutcome,
    },
    /// The surface failed to load something.
    LoadError { frame: FrameKind, detail: String },
    /// Re-run the resolution cycle without resetting the guard.
    CheckConnection,
    /// A bridge call from hosted content.
    Bridge {
        payload: String,
        reply: oneshot::Sender<BridgeReply>,
    },
    Shutdown,
}

/// Handle used by host callbacks and bridge glue.
///
/// Posting never blocks, so it is safe to call from platform callbacks.
#[derive(Debug, Clone)]
pub struct ShellHandle {
    tx: mpsc::UnboundedSender<PresentationMessage>,
}

impl ShellHandle {
    pub(crate) const fn new(tx: mpsc::UnboundedSender<PresentationMessage>) -> Self {
        Self { tx }
    }

    /// Start a fresh activation (e.g. the host view was recreated).
    pub fn activate(&self) -> Result<(), CoreError> {
        self.post(PresentationMessage::Activate)
    }

    /// Report a load failure for the given frame.
    pub fn report_load_error(
        &self,
        frame: FrameKind,
        detail: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.post(PresentationMessage::LoadError {
            frame,
            detail: detail.into(),
        })
    }

    /// Report that the top-level document failed to load.
    pub fn report_main_frame_load_error(&self, detail: impl Into<String>) -> Result<(), CoreError> {
        self.report_load_error(FrameKind::MainFrame, detail)
    }

    /// Ask for a new resolution cycle (user retry).
    pub fn check_server_connection(&self) -> Result<(), CoreError> {
        self.post(PresentationMessage::CheckConnection)
    }

    /// Deliver a raw bridge call and wait for its reply.
    pub async fn call_bridge(&self, payload: impl Into<String>) -> Result<BridgeReply, CoreError> {
        let (reply, rx) = oneshot::channel();
        self.post(PresentationMessage::Bridge {
            payload: payload.into(),
            reply,
        })?;
        rx.await.map_err(|_| CoreError::ShellClosed)
    }

    /// Stop the presentation loop after the messages already queued.
    pub fn shutdown(&self) -> Result<(), CoreError> {
        self.post(PresentationMessage::Shutdown)
    }

    pub(crate) fn post(&self, message: PresentationMessage) -> Result<(), CoreError> {
        self.tx.send(message).map_err(|_| CoreError::ShellClosed)
    }
}
