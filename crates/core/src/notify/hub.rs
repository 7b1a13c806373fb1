//! Publish/subscribe hub for state and progress.

use std::sync::{Arc, Mutex};

use super::types::{CycleEvent, CycleState};

/// Callback invoked synchronously on every effective change.
pub type EventCallback = Arc<dyn Fn(CycleEvent) + Send + Sync>;

/// Handle returned by [`StateHub::subscribe`], used to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct HubInner {
    state: CycleState,
    progress: u8,
    next_id: u64,
    subscribers: Vec<(u64, EventCallback)>,
}

/// Owner of the two observable fields.
///
/// Only the orchestrator and its phase runners write here, one at a time;
/// that single-writer discipline is what guarantees subscribers see every
/// intermediate value in production order, with no batching or coalescing.
/// Writes that do not change the value are not delivered.
pub struct StateHub {
    inner: Mutex<HubInner>,
}

impl Default for StateHub {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHub {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HubInner {
                state: CycleState::Waiting,
                progress: 0,
                next_id: 0,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Attach a subscriber. The callback runs synchronously on whichever
    /// context performs the write.
    pub fn subscribe(&self, callback: EventCallback) -> SubscriptionId {
        let mut inner = self.inner.lock().expect("state hub poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, callback));
        SubscriptionId(id)
    }

    /// Detach a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().expect("state hub poisoned");
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id.0);
    }

    /// Current cycle state snapshot.
    pub fn state(&self) -> CycleState {
        self.inner.lock().expect("state hub poisoned").state
    }

    /// Current progress snapshot.
    pub fn progress(&self) -> u8 {
        self.inner.lock().expect("state hub poisoned").progress
    }

    /// Assign the cycle state, notifying subscribers iff the value changed.
    pub fn set_state(&self, state: CycleState) {
        let callbacks = {
            let mut inner = self.inner.lock().expect("state hub poisoned");
            if inner.state == state {
                return;
            }
            inner.state = state;
            inner
                .subscribers
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect::<Vec<_>>()
        };

        for callback in callbacks {
            callback(CycleEvent::State(state));
        }
    }

    /// Assign the progress value, notifying subscribers iff it changed.
    pub fn set_progress(&self, progress: u8) {
        debug_assert!(progress <= 100);
        let callbacks = {
            let mut inner = self.inner.lock().expect("state hub poisoned");
            if inner.progress == progress {
                return;
            }
            inner.progress = progress;
            inner
                .subscribers
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect::<Vec<_>>()
        };

        for callback in callbacks {
            callback(CycleEvent::Progress(progress));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_hub() -> (StateHub, Arc<Mutex<Vec<CycleEvent>>>) {
        let hub = StateHub::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        hub.subscribe(Arc::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        (hub, events)
    }

    #[test]
    fn test_initial_snapshot() {
        let hub = StateHub::new();
        assert_eq!(hub.state(), CycleState::Waiting);
        assert_eq!(hub.progress(), 0);
    }

    #[test]
    fn test_changes_delivered_in_order() {
        let (hub, events) = recording_hub();

        hub.set_state(CycleState::Initializing);
        hub.set_progress(50);
        hub.set_state(CycleState::Downloading);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                CycleEvent::State(CycleState::Initializing),
                CycleEvent::Progress(50),
                CycleEvent::State(CycleState::Downloading),
            ]
        );
    }

    #[test]
    fn test_unchanged_values_not_delivered() {
        let (hub, events) = recording_hub();

        hub.set_progress(0); // already 0
        hub.set_state(CycleState::Waiting); // already Waiting
        hub.set_progress(10);
        hub.set_progress(10);

        assert_eq!(*events.lock().unwrap(), vec![CycleEvent::Progress(10)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let hub = StateHub::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let id = hub.subscribe(Arc::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        hub.set_progress(10);
        hub.unsubscribe(id);
        hub.set_progress(20);

        assert_eq!(*events.lock().unwrap(), vec![CycleEvent::Progress(10)]);
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let hub = StateHub::new();
        let first = Arc::new(Mutex::new(0u32));
        let second = Arc::new(Mutex::new(0u32));

        let sink = Arc::clone(&first);
        hub.subscribe(Arc::new(move |_| *sink.lock().unwrap() += 1));
        let sink = Arc::clone(&second);
        hub.subscribe(Arc::new(move |_| *sink.lock().unwrap() += 1));

        hub.set_state(CycleState::Initializing);

        assert_eq!(*first.lock().unwrap(), 1);
        assert_eq!(*second.lock().unwrap(), 1);
    }
}
