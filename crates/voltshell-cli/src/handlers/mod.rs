//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &ShellContext, ...) -> Result<()>`
//! - Thin wrappers that call into the runtime and format terminal output
//!
//! Fallback policy lives in the core; handlers never decide sources.

pub mod config;
pub mod probe;
pub mod resolve;
pub mod run;
