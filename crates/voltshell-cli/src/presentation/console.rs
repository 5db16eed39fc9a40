//! A [`PresentationSurface`] that prints to a terminal.

use std::io::{self, Write};

use tracing::warn;
use voltshell_core::ports::PresentationSurface;
use voltshell_core::{ContentSource, ShellEvent};

/// Writes one line per load and per notice.
pub struct ConsoleSurface<W: Write> {
    out: W,
}

impl ConsoleSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> PresentationSurface for ConsoleSurface<W> {
    fn load(&mut self, source: &ContentSource) {
        self.line(&format!("load {source}"));
    }

    fn notify_user(&mut self, message: &str) {
        self.line(&format!("notice {message}"));
    }
}

/// One JSON line per event.
pub fn format_event(event: &ShellEvent) -> String {
    serde_json::to_string(event)
        .unwrap_or_else(|e| format!("{{\"type\":\"unprintable\",\"error\":\"{e}\"}}"))
}
