//! Domain value types.
//!
//! Everything here is a plain value: constructed, consumed, discarded.

mod content;
mod reachability;

pub use content::{ContentSource, FrameKind, Notice, ResolutionOutcome, ResolutionTrigger};
pub use reachability::{
    NetworkAvailability, ReachabilityResult, SUCCESS_STATUS_MAX, SUCCESS_STATUS_MIN,
    UnreachableReason, classify_status,
};
