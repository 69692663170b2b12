//! Continuous progress signal and its subscription lifecycle.
//!
//! The external paging controller owns the value and drives it at
//! animation cadence; the engine only reads it.  Subscriptions are
//! scoped resources: dropping the [`Subscription`] guard unregisters
//! the listener, so a torn-down component cannot leak a callback.
//! Everything is single-threaded (`Rc`/`Cell`/`RefCell`), matching the
//! UI-thread-only mutation model of the rest of the engine.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(f32)>>;

struct SignalInner {
    value: Cell<f32>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Cloneable handle to a shared progress scalar.
#[derive(Clone)]
pub struct ProgressSignal {
    inner: Rc<SignalInner>,
}

impl ProgressSignal {
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                value: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Returns the last value set, without notifying anyone.
    pub fn get(&self) -> f32 {
        self.inner.value.get()
    }

    /// Stores `value` and notifies every live listener.
    ///
    /// Listeners registered or dropped during dispatch are handled:
    /// registration membership is re-checked before each callback runs,
    /// so a subscription dropped mid-dispatch is not invoked.
    pub fn set(&self, value: f32) {
        self.inner.value.set(value);

        // Snapshot outside the borrow so callbacks may subscribe or
        // unsubscribe without re-entering the RefCell.
        let snapshot: Vec<(u64, Listener)> = self.inner.listeners.borrow().clone();
        for (id, listener) in snapshot {
            let still_registered = self
                .inner
                .listeners
                .borrow()
                .iter()
                .any(|(lid, _)| *lid == id);
            if still_registered {
                (&mut *listener.borrow_mut())(value);
            }
        }
    }

    /// Registers `callback` for every subsequent `set`, returning the
    /// guard that keeps it registered.
    #[must_use = "dropping the Subscription immediately unregisters the listener"]
    pub fn subscribe(&self, callback: impl FnMut(f32) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));
        Subscription {
            signal: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// RAII guard for one registered listener.
///
/// Must be held for as long as the listener should receive ticks;
/// dropping it releases the registration (release-on-unmount).
pub struct Subscription {
    signal: Weak<SignalInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
