//! Cycle state and change notification.
//!
//! The hub owns the two observable fields, `CycleState` and progress, and
//! delivers every effective change synchronously and in order to all current
//! subscribers. Subscribers receive immutable snapshots and marshal their own
//! execution context; the hub makes no thread-affinity guarantee about which
//! context delivers a notification.

mod hub;
mod types;

pub use hub::{EventCallback, StateHub, SubscriptionId};
pub use types::{CycleEvent, CycleState};
