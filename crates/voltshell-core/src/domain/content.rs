//! Content sources and resolution outcomes.
//!
//! These are the values the resolver hands to the presentation layer. They are
//! created fresh for every resolution and discarded once applied.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the hosted web application should be loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentSource {
    /// The live web server.
    Remote {
        /// Absolute URL of the server.
        url: String,
    },

    /// The web app bundled with the host package.
    Bundled {
        /// Path relative to the host's asset root.
        path: String,
    },

    /// The static offline page.
    Offline {
        /// Path relative to the host's asset root.
        #[serde(rename = "assetPath")]
        asset_path: String,
    },
}

impl ContentSource {
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    pub fn bundled(path: impl Into<String>) -> Self {
        Self::Bundled { path: path.into() }
    }

    pub fn offline(asset_path: impl Into<String>) -> Self {
        Self::Offline {
            asset_path: asset_path.into(),
        }
    }

    /// Short lowercase name of the tier (`remote`, `bundled`, `offline`).
    #[must_use]
    pub const fn tier(&self) -> &'static str {
        match self {
            Self::Remote { .. } => "remote",
            Self::Bundled { .. } => "bundled",
            Self::Offline { .. } => "offline",
        }
    }

    /// The URL or asset path this source points at.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Remote { url } => url,
            Self::Bundled { path } => path,
            Self::Offline { asset_path } => asset_path,
        }
    }

    #[must_use]
    pub const fn is_offline(&self) -> bool {
        matches!(self, Self::Offline { .. })
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.tier(), self.location())
    }
}

/// A short message surfaced to the user next to a resolution outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notice(String);

impl Notice {
    /// Shown when the device reports no usable network.
    pub const NO_NETWORK: &'static str = "No network connection. Using offline mode.";

    /// Shown after the main frame failed to load and the shell fell back.
    pub const CONNECTION_ISSUE: &'static str = "Connection issue. Using offline mode.";

    /// Shown when the server is down and no bundled app exists (opt-in).
    pub const SERVER_UNAVAILABLE: &'static str = "Server unavailable. Using offline mode.";

    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn no_network() -> Self {
        Self::new(Self::NO_NETWORK)
    }

    pub fn connection_issue() -> Self {
        Self::new(Self::CONNECTION_ISSUE)
    }

    pub fn server_unavailable() -> Self {
        Self::new(Self::SERVER_UNAVAILABLE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The content source chosen by one resolution, plus an optional notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub source: ContentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl ResolutionOutcome {
    /// Outcome with no user-facing notice.
    pub const fn silent(source: ContentSource) -> Self {
        Self {
            source,
            notice: None,
        }
    }

    pub const fn with_notice(source: ContentSource, notice: Notice) -> Self {
        Self {
            source,
            notice: Some(notice),
        }
    }
}

/// Why a resolution cycle was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTrigger {
    /// The shell was (re)activated by the host.
    Activation,
    /// A user or hosted content asked for a new connectivity check.
    Retry,
    /// The main frame failed to load.
    LoadFailure,
}

impl ResolutionTrigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activation => "activation",
            Self::Retry => "retry",
            Self::LoadFailure => "load_failure",
        }
    }

    /// Label for one cycle standing in for both `self` and `other`.
    ///
    /// An explicit activation outranks a retry, which outranks a load
    /// failure, so merged requests keep the most significant reason.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::LoadFailure => 0,
            Self::Retry => 1,
            Self::Activation => 2,
        }
    }
}

impl fmt::Display for ResolutionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which document a reported load failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// The top-level document.
    MainFrame,
    /// An embedded image, script, stylesheet or similar.
    SubResource,
}
