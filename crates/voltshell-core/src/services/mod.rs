//! Core services: fallback policy and per-activation state.

pub mod resolver;
pub mod session;

pub use resolver::{ContentSourceResolver, Resolution, ResolverConfig};
pub use session::{LoadErrorDecision, ShellSession};
