//! Filesystem-backed bundle locator.

use std::path::PathBuf;

use tracing::{debug, warn};
use voltshell_core::ports::BundleLocatorPort;
use voltshell_core::settings::is_contained_relative_path;

/// Looks up bundled assets under a root directory.
#[derive(Debug, Clone)]
pub struct FsBundleLocator {
    root: PathBuf,
}

impl FsBundleLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BundleLocatorPort for FsBundleLocator {
    fn exists(&self, relative_path: &str) -> bool {
        if !is_contained_relative_path(relative_path) {
            warn!(path = relative_path, "Refusing asset path outside the asset root");
            return false;
        }
        let path = self.root.join(relative_path);
        let found = path.is_file();
        debug!(path = %path.display(), found, "Checked bundled asset");
        found
    }
}
