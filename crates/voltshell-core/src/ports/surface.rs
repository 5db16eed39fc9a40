//! Presentation surface and host action ports.
//!
//! The embedded browser component belongs to the host platform. The shell
//! drives it only through [`PresentationSurface`], always from the thread that
//! owns it, so the trait carries no `Send` bound.

use thiserror::Error;
use url::Url;

use crate::domain::ContentSource;

/// The host's rendering surface.
pub trait PresentationSurface {
    /// Load the given source into the main frame.
    fn load(&mut self, source: &ContentSource);

    /// Show a short toast-style message.
    fn notify_user(&mut self, message: &str);
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for Box<S> {
    fn load(&mut self, source: &ContentSource) {
        (**self).load(source);
    }

    fn notify_user(&mut self, message: &str) {
        (**self).notify_user(message);
    }
}

/// Errors raised by host facilities.
#[derive(Debug, Error)]
pub enum HostError {
    /// The platform URL opener could not be started or refused the URL.
    #[error("Failed to open {url}: {reason}")]
    OpenLink { url: String, reason: String },
}

/// Native facilities that hosted content may invoke through the bridge.
pub trait HostActionsPort: Send + Sync {
    /// Hand the URL to the host's external URL-open facility.
    fn open_external_link(&self, url: &Url) -> Result<(), HostError>;

    /// Platform/version identifier string.
    fn device_info(&self) -> String;
}
