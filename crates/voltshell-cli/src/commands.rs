//! Available commands.

use clap::Subcommand;

/// Commands understood by the voltshell host.
#[derive(Subcommand)]
pub enum Commands {
    /// Probe a server once and report whether it is usable
    Probe {
        /// URL to probe (defaults to the configured remote URL)
        url: Option<String>,
    },

    /// Run one proactive resolution and print the chosen content source
    Resolve {
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a headless shell, reading host callbacks from stdin
    ///
    /// Commands: error [detail], subresource-error [detail], retry,
    /// activate, bridge <json>, quit
    Run {
        /// Print shell events as JSON lines
        #[arg(long)]
        events: bool,
    },

    /// Show the effective settings
    Config,
}
