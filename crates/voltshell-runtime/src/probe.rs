//! HTTP connectivity probe.
//!
//! Makes a single GET request and classifies the response by status code.
//! Every transport failure is folded into `Unreachable` with a classified
//! reason; nothing is propagated to the caller.

use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use voltshell_core::ports::{ConnectivityProbePort, ProbeTarget};
use voltshell_core::{ReachabilityResult, UnreachableReason, classify_status};

/// Probe backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpConnectivityProbe {
    client: Client,
}

impl HttpConnectivityProbe {
    /// Build a probe whose connect phase is bounded by `connect_timeout`.
    ///
    /// The read phase gets the per-target timeout on top of that, so a whole
    /// probe takes at most twice the target timeout.
    pub fn new(connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder().connect_timeout(connect_timeout).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy settings, TLS roots, ...).
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConnectivityProbePort for HttpConnectivityProbe {
    async fn probe(&self, target: &ProbeTarget) -> ReachabilityResult {
        let started = Instant::now();
        let result = match self
            .client
            .get(&target.url)
            .timeout(target.timeout.saturating_mul(2))
            .send()
            .await
        {
            Ok(response) => classify_status(response.status().as_u16()),
            Err(e) => ReachabilityResult::unreachable(classify_error(&e)),
        };

        debug!(
            url = %target.url,
            %result,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Connectivity probe finished"
        );
        result
    }
}

/// Map a reqwest error onto an [`UnreachableReason`].
///
/// reqwest's `Display` already walks the source chain, so the rendered
/// message is the full diagnostic.
fn classify_error(error: &reqwest::Error) -> UnreachableReason {
    let detail = error.to_string();
    if error.is_timeout() {
        UnreachableReason::Timeout
    } else if error.is_builder() {
        UnreachableReason::InvalidUrl(detail)
    } else if error.is_connect() {
        classify_connect_failure(detail)
    } else {
        UnreachableReason::Transport(detail)
    }
}

/// Name resolution failures surface as connect errors; tell them apart by message.
fn classify_connect_failure(detail: String) -> UnreachableReason {
    if detail.contains("dns error") || detail.contains("failed to lookup address") {
        UnreachableReason::Dns(detail)
    } else {
        UnreachableReason::Connect(detail)
    }
}
