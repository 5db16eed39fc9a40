//! Core error type.
//!
//! Resolution itself never fails; these errors cover configuration, the
//! bridge, host facilities and the shell's message channels. Adapters map
//! them to their own error types (exit codes, bridge replies).

use thiserror::Error;

use crate::bridge::BridgeError;
use crate::ports::HostError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A bridge call could not be decoded or executed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// A host facility failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The shell's presentation loop is no longer running.
    #[error("Shell is not running")]
    ShellClosed,
}
