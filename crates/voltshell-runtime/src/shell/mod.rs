//! Shell runtime: one resolution worker plus one presentation loop.
//!
//! ```text
//! host callbacks ──► ShellHandle ──► presentation queue ──► PresentationLoop ──► surface
//!                                        ▲                        │
//!                                        │ Resolved               │ ResolutionTrigger
//!                                        └──── ResolutionWorker ◄─┘
//! ```

mod handle;
mod presentation;
mod worker;

pub use handle::ShellHandle;
pub use presentation::{PresentationLoop, ShellDeps, new_shell};
