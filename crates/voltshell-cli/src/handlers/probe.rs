//! Probe command handler.

use anyhow::Result;
use voltshell_core::ReachabilityResult;
use voltshell_core::ports::{ConnectivityProbePort, ProbeTarget};
use voltshell_runtime::{HttpConnectivityProbe, ShellContext};

use crate::error::CliError;

/// Probe `url` (or the configured remote) once.
///
/// Prints `reachable` or `unreachable: <reason>`; an unreachable server is
/// also reported as an error so the exit status reflects it.
pub async fn execute(ctx: &ShellContext, url: Option<String>) -> Result<()> {
    let url = url.unwrap_or_else(|| ctx.settings.remote_url.clone());
    let timeout = ctx.settings.probe_timeout();
    let probe = HttpConnectivityProbe::new(timeout)?;

    let result = probe.probe(&ProbeTarget::new(url, timeout)).await;
    println!("{result}");

    match result {
        ReachabilityResult::Reachable => Ok(()),
        ReachabilityResult::Unreachable { reason } => {
            Err(CliError::Unreachable(reason.to_string()).into())
        }
    }
}
