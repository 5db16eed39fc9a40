//! Per-activation shell state.
//!
//! Holds the one-shot "fallback already taken" guard. The session is owned by
//! the presentation loop and only touched from that thread.

use tracing::{debug, warn};

use crate::domain::{ContentSource, FrameKind, ResolutionOutcome};
use crate::services::resolver::ContentSourceResolver;

/// What to do about a reported load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorDecision {
    /// Load this outcome instead. Happens at most once per activation.
    Fallback(ResolutionOutcome),
    /// The fallback was already used during this activation.
    Suppressed,
    /// The error concerned a sub-resource and never triggers fallback.
    Ignored,
}

/// Orchestrator state for one activation of the shell.
#[derive(Debug, Default)]
pub struct ShellSession {
    fallback_taken: bool,
    activations: u64,
    current: Option<ContentSource>,
}

impl ShellSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh activation. Clears the fallback guard.
    pub fn activate(&mut self) {
        self.activations += 1;
        self.fallback_taken = false;
        debug!(activation = self.activations, "Shell session activated");
    }

    /// Decide how to react to a load error reported by the surface.
    pub fn on_load_error(
        &mut self,
        frame: FrameKind,
        resolver: &ContentSourceResolver,
    ) -> LoadErrorDecision {
        if frame == FrameKind::SubResource {
            debug!("Ignoring sub-resource load error");
            return LoadErrorDecision::Ignored;
        }

        if self.fallback_taken {
            warn!(
                current = ?self.current,
                "Main frame failed again after fallback, not retrying"
            );
            return LoadErrorDecision::Suppressed;
        }

        self.fallback_taken = true;
        LoadErrorDecision::Fallback(resolver.fallback_after_load_failure())
    }

    /// Remember which source the surface is showing.
    pub fn record_applied(&mut self, source: &ContentSource) {
        self.current = Some(source.clone());
    }

    pub const fn fallback_taken(&self) -> bool {
        self.fallback_taken
    }

    pub const fn activations(&self) -> u64 {
        self.activations
    }

    pub const fn current(&self) -> Option<&ContentSource> {
        self.current.as_ref()
    }
}
