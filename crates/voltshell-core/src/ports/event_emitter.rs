//! Event emitter trait for shell event broadcasting.
//!
//! Implementations handle transport details (channels, logs, host bridges).

use crate::events::ShellEvent;

/// Trait for emitting shell events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and hosts that don't listen
/// - `BroadcastEmitter` in `voltshell-runtime` - fan-out over a channel
pub trait ShellEventEmitter: Send + Sync {
    /// Emit a shell event.
    ///
    /// This method must not block.
    fn emit(&self, event: ShellEvent);
}

/// A no-op event emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl ShellEventEmitter for NoopEmitter {
    fn emit(&self, _event: ShellEvent) {}
}
