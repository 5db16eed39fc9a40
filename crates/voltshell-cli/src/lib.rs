//! Console host and diagnostics for voltshell.
//!
//! Wraps the runtime in a terminal: probe a server, preview the resolver's
//! decision, or run a headless shell driven from stdin.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use commands::Commands;
pub use error::CliError;
pub use parser::{Cli, NetworkMode};
