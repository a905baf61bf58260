//! The toggle state machine.
//!
//! One invocation observes the target (process state, then the canonical
//! window) and takes exactly one action: launch, wait for startup, minimize
//! or restore.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::ToggleError;
pub use handler::{DetachedLauncher, Launcher, Sleeper, ThreadSleeper, ToggleOrchestrator};
pub use types::{
    ProcessSummary, StatusReport, TargetDescriptor, ToggleOutcome, ToggleReport, ToggleState,
    messages,
};
