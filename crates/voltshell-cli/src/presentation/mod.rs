//! Terminal output for the console host.

pub mod console;

pub use console::{ConsoleSurface, format_event};
