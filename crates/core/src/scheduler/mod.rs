//! Cooperative scheduling loop.
//!
//! Re-triggers the orchestrator once per interval without drift and without
//! re-entrancy: a single loop polls the remaining time to a target instant
//! and only advances the target after the triggered cycle has finished. No
//! fire-and-forget timers, so a long cycle can never cause two overlapping
//! triggers.

mod config;
mod countdown;
mod runner;

pub use config::SchedulerConfig;
pub use countdown::{CountdownDisplay, NullCountdown};
pub use runner::CycleScheduler;
