//! Default host facilities for desktop hosts.
//!
//! Mobile hosts provide their own [`HostActionsPort`]; this implementation
//! covers desktop development and the console shell.
//!
//! Openers are spawned through tokio so that exited children are reaped by
//! the runtime instead of lingering as zombies for the life of the shell.
//! Must be called from within a tokio runtime.

use std::process::Stdio;

use sysinfo::System;
use tokio::process::Command;
use tracing::{debug, info};
use url::Url;
use voltshell_core::ports::{HostActionsPort, HostError};

/// Opens links with the platform opener and reports OS details via sysinfo.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHostActions;

impl DefaultHostActions {
    pub const fn new() -> Self {
        Self
    }
}

impl HostActionsPort for DefaultHostActions {
    fn open_external_link(&self, url: &Url) -> Result<(), HostError> {
        info!(%url, "Opening external link");
        spawn_detached(opener_command(url.as_str()), url)
    }

    fn device_info(&self) -> String {
        device_info_string(
            System::long_os_version().as_deref(),
            std::env::consts::ARCH,
        )
    }
}

/// Start `command` without waiting for it; the runtime reaps it on exit.
fn spawn_detached(mut command: Command, url: &Url) -> Result<(), HostError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(false);
    match command.spawn() {
        Ok(child) => {
            debug!(pid = ?child.id(), "Opener started");
            Ok(())
        }
        Err(e) => Err(HostError::OpenLink {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// `voltshell/<version> (<os>; <arch>)`
pub(crate) fn device_info_string(os: Option<&str>, arch: &str) -> String {
    format!(
        "voltshell/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        os.unwrap_or(std::env::consts::OS),
        arch
    )
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
