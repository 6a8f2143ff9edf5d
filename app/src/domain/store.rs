//! Store aggregator: single mutation entry point for the state tree.
//!
//! [`Store::dispatch`] applies an event, appends it to the event log and
//! broadcasts one [`StoreNotification`] to every subscriber. Reads take a
//! snapshot clone and always see the latest settled state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::trace;

use super::state::{AppState, StoreEvent};

/// Default notification buffer per subscriber.
const DEFAULT_CAPACITY: usize = 256;

/// Notification sent to subscribers after each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNotification {
    /// Position of the event in the log, starting at 1.
    pub sequence: u64,
    pub event: StoreEvent,
}

#[derive(Debug, Default)]
struct StoreInner {
    state: AppState,
    events: Vec<StoreEvent>,
    sequence: u64,
}

/// Explicit, shareable state container.
///
/// # Examples
/// ```
/// use projectmate::domain::{AppState, SliceEvent, SliceOperation, Store, StoreEvent};
///
/// let store = Store::new();
/// let mut notifications = store.subscribe();
///
/// store.dispatch(StoreEvent::Projects(SliceEvent::Started(SliceOperation::Fetch)));
///
/// assert!(store.snapshot().projects().is_loading());
/// assert_eq!(notifications.try_recv().map(|n| n.sequence), Ok(1));
/// assert_eq!(AppState::replay(store.events()), store.snapshot());
/// ```
#[derive(Debug)]
pub struct Store {
    inner: Mutex<StoreInner>,
    notifier: broadcast::Sender<StoreNotification>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store whose subscribers buffer up to `capacity`
    /// notifications before lagging.
    pub fn with_capacity(capacity: usize) -> Self {
        let (notifier, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Mutex::new(StoreInner::default()),
            notifier,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `event`, log it and notify subscribers. Returns the event's
    /// sequence number.
    pub fn dispatch(&self, event: StoreEvent) -> u64 {
        let mut inner = self.lock();
        inner.state.apply(event.clone());
        inner.events.push(event.clone());
        inner.sequence += 1;
        let sequence = inner.sequence;

        trace!(sequence, slice = event.slice_name(), "store event applied");
        // Sending under the lock keeps notification order equal to log order.
        if self
            .notifier
            .send(StoreNotification { sequence, event })
            .is_err()
        {
            trace!(sequence, "no store subscribers");
        }
        sequence
    }

    /// Subscribe to notifications for events dispatched from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreNotification> {
        self.notifier.subscribe()
    }

    /// Clone of the latest settled state.
    pub fn snapshot(&self) -> AppState {
        self.lock().state.clone()
    }

    /// Read the current state without cloning the whole tree.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock().state)
    }

    /// The ordered event log.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.lock().events.clone()
    }

    /// Number of events dispatched so far.
    pub fn sequence(&self) -> u64 {
        self.lock().sequence
    }
}
