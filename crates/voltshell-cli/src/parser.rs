//! Main CLI parser and top-level argument handling.
//!
//! Global flags double as the configuration layer: each one can also be set
//! through a `VOLTSHELL_*` environment variable (or `.env`), and anything
//! left unset keeps its built-in default.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use voltshell_core::{NetworkAvailability, ShellSettings, ShellSettingsUpdate};

use crate::commands::Commands;

/// Pin the network status instead of asking the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NetworkMode {
    Online,
    Offline,
}

impl From<NetworkMode> for NetworkAvailability {
    fn from(mode: NetworkMode) -> Self {
        match mode {
            NetworkMode::Online => Self::Available,
            NetworkMode::Offline => Self::Unavailable,
        }
    }
}

/// Command-line interface for the voltshell host.
#[derive(Parser)]
#[command(name = "voltshell")]
#[command(about = "Resolve and serve the VoltBetta web app with offline fallback")]
#[command(version)]
pub struct Cli {
    /// Base URL of the live server
    #[arg(long, global = true, env = "VOLTSHELL_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Directory holding the bundled assets
    #[arg(long, global = true, env = "VOLTSHELL_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Bundled web app entry point, relative to the assets directory
    #[arg(long, global = true, env = "VOLTSHELL_BUNDLED_PATH")]
    pub bundled_path: Option<String>,

    /// Offline page, relative to the assets directory
    #[arg(long, global = true, env = "VOLTSHELL_OFFLINE_PATH")]
    pub offline_path: Option<String>,

    /// Probe timeout in milliseconds
    #[arg(long, global = true, env = "VOLTSHELL_PROBE_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Show a notice when the server is down and no bundle is installed
    #[arg(long, global = true, env = "VOLTSHELL_NOTIFY_MISSING_BUNDLE")]
    pub notify_missing_bundle: bool,

    /// Pin the network status instead of querying the system
    #[arg(long, global = true, value_enum)]
    pub network: Option<NetworkMode>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings overrides collected from flags and environment.
    pub fn settings_update(&self) -> ShellSettingsUpdate {
        ShellSettingsUpdate {
            remote_url: self.remote_url.clone(),
            assets_dir: self.assets_dir.clone(),
            bundled_app_path: self.bundled_path.clone(),
            offline_asset_path: self.offline_path.clone(),
            probe_timeout_ms: self.timeout_ms,
            notify_on_missing_bundle: self.notify_missing_bundle.then_some(true),
            network_override: self.network.map(|mode| Some(mode.into())),
        }
    }

    /// Effective settings: defaults with overrides applied.
    pub fn settings(&self) -> ShellSettings {
        let mut settings = ShellSettings::default();
        settings.merge(&self.settings_update());
        settings
    }
}
