//! Connectivity probe port.
//!
//! Implementations perform one HTTP GET against a target and fold every
//! outcome, transport failures included, into a [`ReachabilityResult`].
//! The resolver relies on this totality: there is no error channel.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ReachabilityResult;

/// What to probe and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Absolute URL to GET.
    pub url: String,
    /// Budget for each of the connect and read phases.
    pub timeout: Duration,
}

impl ProbeTarget {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

/// Port for single-shot reachability checks.
///
/// # Contract
///
/// - Exactly one request per call, no internal retries
/// - `Reachable` iff the response status is 2xx
/// - Never panics and never propagates transport errors
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectivityProbePort: Send + Sync {
    /// Probe the target once and classify the result.
    async fn probe(&self, target: &ProbeTarget) -> ReachabilityResult;
}
