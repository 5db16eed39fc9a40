//! Canonical shell events.
//!
//! Single source of truth for everything the shell reports to listeners
//! (console output, diagnostics overlays, tests).
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "source_resolved", "trigger": "activation", "outcome": { ... } }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{ReachabilityResult, ResolutionOutcome, ResolutionTrigger};

/// Events emitted by the shell runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    /// A resolution cycle was handed to the worker.
    ResolutionStarted { trigger: ResolutionTrigger },

    /// The remote probe finished.
    ProbeCompleted {
        url: String,
        result: ReachabilityResult,
        #[serde(rename = "elapsedMs")]
        elapsed_ms: u64,
    },

    /// A content source was chosen and applied to the surface.
    SourceResolved {
        trigger: ResolutionTrigger,
        outcome: ResolutionOutcome,
    },

    /// A main-frame load error caused a one-shot fallback.
    FallbackTaken { outcome: ResolutionOutcome },

    /// A main-frame load error arrived after the fallback was already used.
    FallbackSuppressed { detail: String },

    /// Hosted content invoked a bridge operation.
    BridgeCalled { operation: String, ok: bool },
}

impl ShellEvent {
    /// The `type` tag of this event.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::ResolutionStarted { .. } => "resolution_started",
            Self::ProbeCompleted { .. } => "probe_completed",
            Self::SourceResolved { .. } => "source_resolved",
            Self::FallbackTaken { .. } => "fallback_taken",
            Self::FallbackSuppressed { .. } => "fallback_suppressed",
            Self::BridgeCalled { .. } => "bridge_called",
        }
    }
}
