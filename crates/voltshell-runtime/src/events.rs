//! Shell event broadcasting.
//!
//! Fans shell events out to any number of listeners (console output,
//! diagnostics views, tests) over a tokio broadcast channel.

use tokio::sync::broadcast;
use tracing::debug;
use voltshell_core::ShellEvent;
use voltshell_core::ports::ShellEventEmitter;

/// Broadcast channel capacity for shell events
const CHANNEL_CAPACITY: usize = 64;

/// Broadcaster for shell events
pub struct BroadcastEmitter {
    sender: broadcast::Sender<ShellEvent>,
}

impl BroadcastEmitter {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to shell events
    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellEventEmitter for BroadcastEmitter {
    fn emit(&self, event: ShellEvent) {
        debug!(event_type = event.event_type(), "Shell event");
        // Only send if there are receivers
        if self.sender.receiver_count() > 0 {
            let _ = self.sender.send(event);
        }
    }
}
