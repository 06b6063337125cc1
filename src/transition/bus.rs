// Transition signal bus - an in-process publish/subscribe channel for the
// transition lifecycle. Delivery is synchronous, in registration order,
// over a snapshot taken at publish time; one misbehaving observer cannot
// starve the rest or reach the publisher.

use crate::transition::NavRequest;
use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// The fixed set of events the coordinator broadcasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    TransitionStart,
    TransitionComplete,
}

#[derive(Clone, Debug)]
pub enum TransitionEvent {
    Start { target_path: String, request: NavRequest },
    Complete,
}

impl TransitionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::TransitionStart,
            Self::Complete => EventKind::TransitionComplete,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&TransitionEvent)>;

struct Entry {
    id: SubscriptionId,
    kind: EventKind,
    observer: Rc<RefCell<Observer>>,
}

struct BusInner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Cheap-to-clone handle; all clones share the observer list. The app is
/// single-threaded (one egui update loop), so plain `Rc` is enough.
#[derive(Clone)]
pub struct SignalBus {
    inner: Rc<RefCell<BusInner>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner { next_id: 0, entries: Vec::new() })),
        }
    }

    /// Register an observer for one event kind. Observers fire in
    /// registration order. The returned id deregisters it.
    pub fn subscribe<F>(&self, kind: EventKind, observer: F) -> SubscriptionId
    where
        F: FnMut(&TransitionEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            kind,
            observer: Rc::new(RefCell::new(Box::new(observer))),
        });
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().entries.retain(|e| e.id != id);
    }

    /// Fire-and-forget broadcast. The observer list is snapshotted before
    /// delivery, so subscribing or publishing from inside an observer
    /// never mutates the in-progress delivery, and an observer can never
    /// recurse into itself. A panicking observer is isolated and logged;
    /// delivery continues with the next one.
    pub fn publish(&self, event: &TransitionEvent) {
        let snapshot: Vec<Rc<RefCell<Observer>>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == event.kind())
            .map(|e| Rc::clone(&e.observer))
            .collect();

        for observer in snapshot {
            // Skip an observer that is already running further up the
            // stack (reentrant publish of the same event).
            let Ok(mut callback) = observer.try_borrow_mut() else {
                continue;
            };
            let result = catch_unwind(AssertUnwindSafe(|| (*callback)(event)));
            if result.is_err() {
                log::warn!("transition observer panicked during {:?}", event.kind());
            }
        }
    }

    #[cfg(test)]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}
