//! CLI-specific error types and mappings.
//!
//! Maps core errors onto exit codes and user-facing messages.

use thiserror::Error;
use voltshell_core::{CoreError, SettingsError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid console input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin closed, stdout broken, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The probed server is not usable.
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
            Self::Unreachable(_) => 69, // EX_UNAVAILABLE
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Bridge(bridge_err) => Self::Arguments(bridge_err.to_string()),
            CoreError::Host(host_err) => Self::Core(host_err.to_string()),
            err @ CoreError::ShellClosed => Self::Core(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    if err.downcast_ref::<SettingsError>().is_some() {
        return 78;
    }
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Settings(_)) => 78,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Core("x".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Unreachable("x".into()).exit_code(), 69);
    }

    #[test]
    fn test_settings_error_maps_to_config() {
        let cli: CliError = CoreError::from(SettingsError::InvalidTimeout(5)).into();
        assert!(matches!(cli, CliError::Config(_)));
        assert_eq!(cli.exit_code(), 78);
    }

    #[test]
    fn test_anyhow_exit_code() {
        let err = anyhow::Error::from(CliError::Unreachable("timed out".into()));
        assert_eq!(exit_code_for(&err), 69);
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
        let invalid = anyhow::Error::from(SettingsError::InvalidTimeout(5));
        assert_eq!(exit_code_for(&invalid), 78);
    }
}
