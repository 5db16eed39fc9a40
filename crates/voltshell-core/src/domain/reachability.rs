//! Reachability verdicts and device network status.
//!
//! A probe produces exactly one [`ReachabilityResult`]. Failure reasons are
//! carried for diagnostics only; the resolver never branches on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest HTTP status code counted as reachable.
pub const SUCCESS_STATUS_MIN: u16 = 200;

/// Highest HTTP status code counted as reachable.
pub const SUCCESS_STATUS_MAX: u16 = 299;

/// Result of a single probe attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReachabilityResult {
    /// The endpoint answered with a 2xx status.
    Reachable,

    /// The endpoint could not be used.
    Unreachable {
        /// Classified failure reason.
        reason: UnreachableReason,
    },
}

impl ReachabilityResult {
    pub const fn unreachable(reason: UnreachableReason) -> Self {
        Self::Unreachable { reason }
    }

    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable)
    }

    #[must_use]
    pub const fn reason(&self) -> Option<&UnreachableReason> {
        match self {
            Self::Reachable => None,
            Self::Unreachable { reason } => Some(reason),
        }
    }
}

impl fmt::Display for ReachabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable => f.write_str("reachable"),
            Self::Unreachable { reason } => write!(f, "unreachable: {reason}"),
        }
    }
}

/// Why an endpoint was classified as unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum UnreachableReason {
    /// The server answered with a non-2xx status.
    HttpStatus(u16),
    /// Connect or read did not finish in time.
    Timeout,
    /// The TCP/TLS connection could not be established.
    Connect(String),
    /// Host name resolution failed.
    Dns(String),
    /// The configured URL could not be used to build a request.
    InvalidUrl(String),
    /// Any other transport-level failure (reset, malformed response, ...).
    Transport(String),
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP status {code}"),
            Self::Timeout => f.write_str("timed out"),
            Self::Connect(detail) => write!(f, "connection failed: {detail}"),
            Self::Dns(detail) => write!(f, "DNS lookup failed: {detail}"),
            Self::InvalidUrl(detail) => write!(f, "invalid URL: {detail}"),
            Self::Transport(detail) => write!(f, "transport error: {detail}"),
        }
    }
}

/// Classify a received HTTP status code.
///
/// `Reachable` iff `200 <= code <= 299`.
#[must_use]
pub const fn classify_status(code: u16) -> ReachabilityResult {
    if code >= SUCCESS_STATUS_MIN && code <= SUCCESS_STATUS_MAX {
        ReachabilityResult::Reachable
    } else {
        ReachabilityResult::Unreachable {
            reason: UnreachableReason::HttpStatus(code),
        }
    }
}

/// Device network status as reported by the host at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkAvailability {
    Available,
    Unavailable,
}

impl NetworkAvailability {
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<bool> for NetworkAvailability {
    fn from(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}
