//! Shell settings and validation.
//!
//! These are pure configuration types with no infrastructure dependencies.
//! Adapters build a [`ShellSettingsUpdate`] from flags, environment or files
//! and merge it over [`ShellSettings::default`].

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::NetworkAvailability;

/// Default remote server (the Android emulator's alias for the host's localhost).
pub const DEFAULT_REMOTE_URL: &str = "http://10.0.2.2:5000";

/// Default asset root, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default bundled web app entry point, relative to the asset root.
pub const DEFAULT_BUNDLED_APP_PATH: &str = "webapp/index.html";

/// Default offline page, relative to the asset root.
pub const DEFAULT_OFFLINE_ASSET_PATH: &str = "offline.html";

/// Default probe timeout for both the connect and read phases.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

/// Accepted probe timeout range in milliseconds.
pub const PROBE_TIMEOUT_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=60_000;

/// Shell settings structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellSettings {
    /// URL of the live web server.
    pub remote_url: String,

    /// Directory holding bundled assets.
    pub assets_dir: PathBuf,

    /// Bundled web app entry point, relative to `assets_dir`.
    pub bundled_app_path: String,

    /// Offline page, relative to `assets_dir`.
    pub offline_asset_path: String,

    /// Probe timeout in milliseconds (connect and read phases).
    pub probe_timeout_ms: u64,

    /// Attach a notice when the server is down and no bundled app exists.
    pub notify_on_missing_bundle: bool,

    /// Pin the reported network status instead of asking the system.
    pub network_override: Option<NetworkAvailability>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            bundled_app_path: DEFAULT_BUNDLED_APP_PATH.to_string(),
            offline_asset_path: DEFAULT_OFFLINE_ASSET_PATH.to_string(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            notify_on_missing_bundle: false,
            network_override: None,
        }
    }
}

impl ShellSettings {
    /// Probe timeout as a [`Duration`].
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Merge an update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &ShellSettingsUpdate) {
        if let Some(ref url) = other.remote_url {
            self.remote_url.clone_from(url);
        }
        if let Some(ref dir) = other.assets_dir {
            self.assets_dir.clone_from(dir);
        }
        if let Some(ref path) = other.bundled_app_path {
            self.bundled_app_path.clone_from(path);
        }
        if let Some(ref path) = other.offline_asset_path {
            self.offline_asset_path.clone_from(path);
        }
        if let Some(timeout) = other.probe_timeout_ms {
            self.probe_timeout_ms = timeout;
        }
        if let Some(notify) = other.notify_on_missing_bundle {
            self.notify_on_missing_bundle = notify;
        }
        if let Some(ref network) = other.network_override {
            self.network_override = *network;
        }
    }

    /// Render settings as `key = value` lines for diagnostics.
    #[must_use]
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("remote_url", self.remote_url.clone()),
            ("assets_dir", self.assets_dir.display().to_string()),
            ("bundled_app_path", self.bundled_app_path.clone()),
            ("offline_asset_path", self.offline_asset_path.clone()),
            ("probe_timeout_ms", self.probe_timeout_ms.to_string()),
            (
                "notify_on_missing_bundle",
                self.notify_on_missing_bundle.to_string(),
            ),
            (
                "network_override",
                match self.network_override {
                    None => "system",
                    Some(NetworkAvailability::Available) => "online",
                    Some(NetworkAvailability::Unavailable) => "offline",
                }
                .to_string(),
            ),
        ]
    }
}

/// Partial settings update.
///
/// `None` leaves a field unchanged. `network_override` is doubly optional:
/// `Some(None)` clears a pinned value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellSettingsUpdate {
    pub remote_url: Option<String>,
    pub assets_dir: Option<PathBuf>,
    pub bundled_app_path: Option<String>,
    pub offline_asset_path: Option<String>,
    pub probe_timeout_ms: Option<u64>,
    pub notify_on_missing_bundle: Option<bool>,
    pub network_override: Option<Option<NetworkAvailability>>,
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Remote URL is not a valid URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Remote URL must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("Probe timeout must be between 100 and 60,000 ms, got {0}")]
    InvalidTimeout(u64),

    #[error("{field} cannot be empty")]
    EmptyAssetPath { field: &'static str },

    #[error("{field} must be a relative path inside the asset root, got {path}")]
    AssetPathEscapes { field: &'static str, path: String },
}

/// Validate settings values.
pub fn validate_settings(settings: &ShellSettings) -> Result<(), SettingsError> {
    let url = Url::parse(&settings.remote_url)
        .map_err(|e| SettingsError::InvalidRemoteUrl(format!("{}: {e}", settings.remote_url)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SettingsError::UnsupportedScheme(url.scheme().to_string()));
    }

    if !PROBE_TIMEOUT_RANGE_MS.contains(&settings.probe_timeout_ms) {
        return Err(SettingsError::InvalidTimeout(settings.probe_timeout_ms));
    }

    validate_asset_path("bundled_app_path", &settings.bundled_app_path)?;
    validate_asset_path("offline_asset_path", &settings.offline_asset_path)?;

    Ok(())
}

/// Check that a path stays inside the asset root.
///
/// Shared with the filesystem bundle locator.
#[must_use]
pub fn is_contained_relative_path(path: &str) -> bool {
    let path = Path::new(path);
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

fn validate_asset_path(field: &'static str, path: &str) -> Result<(), SettingsError> {
    if path.trim().is_empty() {
        return Err(SettingsError::EmptyAssetPath { field });
    }
    if !is_contained_relative_path(path) {
        return Err(SettingsError::AssetPathEscapes {
            field,
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ShellSettings::default();
        assert_eq!(settings.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(settings.probe_timeout(), Duration::from_millis(3000));
        assert!(!settings.notify_on_missing_bundle);
        assert!(settings.network_override.is_none());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_merge_only_touches_some_fields() {
        let mut settings = ShellSettings::default();
        let update = ShellSettingsUpdate {
            remote_url: Some("https://tank.example.com".to_string()),
            probe_timeout_ms: Some(500),
            network_override: Some(Some(NetworkAvailability::Unavailable)),
            ..Default::default()
        };
        settings.merge(&update);

        assert_eq!(settings.remote_url, "https://tank.example.com");
        assert_eq!(settings.probe_timeout_ms, 500);
        assert_eq!(settings.bundled_app_path, DEFAULT_BUNDLED_APP_PATH);
        assert_eq!(
            settings.network_override,
            Some(NetworkAvailability::Unavailable)
        );

        let clear = ShellSettingsUpdate {
            network_override: Some(None),
            ..Default::default()
        };
        settings.merge(&clear);
        assert!(settings.network_override.is_none());
    }

    #[test]
    fn test_validate_remote_url() {
        let mut settings = ShellSettings {
            remote_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidRemoteUrl(_))
        ));

        settings.remote_url = "ftp://10.0.2.2/".to_string();
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_validate_timeout() {
        let settings = ShellSettings {
            probe_timeout_ms: 50,
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::InvalidTimeout(50))
        );
    }

    #[test]
    fn test_validate_asset_paths() {
        let settings = ShellSettings {
            offline_asset_path: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::EmptyAssetPath {
                field: "offline_asset_path"
            })
        );

        let settings = ShellSettings {
            bundled_app_path: "../outside/index.html".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::AssetPathEscapes { .. })
        ));
    }

    #[test]
    fn test_contained_relative_path() {
        assert!(is_contained_relative_path("webapp/index.html"));
        assert!(is_contained_relative_path("./offline.html"));
        assert!(!is_contained_relative_path("/etc/passwd"));
        assert!(!is_contained_relative_path("webapp/../../secret"));
        assert!(!is_contained_relative_path(""));
    }

    #[test]
    fn test_describe_lists_every_field() {
        let lines = ShellSettings::default().describe();
        assert_eq!(lines.len(), 7);
        assert!(lines.contains(&("network_override", "system".to_string())));
    }

    #[test]
    fn test_describe_uses_network_flag_words() {
        let pinned = |network| {
            let settings = ShellSettings {
                network_override: Some(network),
                ..Default::default()
            };
            settings
                .describe()
                .into_iter()
                .find(|(key, _)| *key == "network_override")
                .map(|(_, value)| value)
        };
        assert_eq!(pinned(NetworkAvailability::Available).as_deref(), Some("online"));
        assert_eq!(pinned(NetworkAvailability::Unavailable).as_deref(), Some("offline"));
    }
}
