#![forbid(unsafe_code)]

//! Shared values that announce their changes.
//!
//! An [`Observable<T>`] is a handle to one slot holding a `T`, a version
//! counter and the list of callbacks watching it. Handles are cheap clones
//! of the same slot. Writing a value equal (by `PartialEq`) to the current
//! one is a no-op; anything else bumps the version and runs every live
//! callback in the order it subscribed.
//!
//! Callbacks are owned by the slot and detached by dropping the
//! [`Subscription`] returned from `subscribe`. A subscription dropped while
//! a notification is in flight (by an earlier callback, say) is skipped for
//! the rest of that round.
//!
//! # Pitfalls
//!
//! - A callback that captures a handle to its own observable keeps the slot
//!   alive until its subscription is dropped.
//! - `NaN != NaN`, so an `Observable<f64>` set to NaN notifies on every
//!   write. Sanitize first.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{trace, trace_span};
use web_time::Instant;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Watcher<T> {
    id: u64,
    live: Rc<Cell<bool>>,
    callback: Callback<T>,
}

struct Slot<T> {
    value: T,
    version: u64,
    next_id: u64,
    watchers: Vec<Watcher<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Versions start at 0 and grow by one per effective write.
pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .field("watchers", &slot.watchers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                version: 0,
                next_id: 0,
                watchers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// `f` must not write to this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.borrow().value)
    }

    /// Replace the value. Callbacks may write back to this observable; the
    /// nested write notifies in turn.
    pub fn set(&self, value: T) {
        {
            let mut slot = self.slot.borrow_mut();
            if slot.value == value {
                return;
            }
            slot.value = value;
            slot.version += 1;
        }
        self.notify();
    }

    /// Edit the value in place. Notifies only if the edit changed it.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Run `callback` after every change until the returned guard drops.
    #[must_use = "dropping the subscription detaches the callback immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let live = Rc::new(Cell::new(true));
        let id = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.watchers.push(Watcher {
                id,
                live: Rc::clone(&live),
                callback: Rc::new(callback),
            });
            id
        };

        let slot: Weak<RefCell<Slot<T>>> = Rc::downgrade(&self.slot);
        Subscription {
            live,
            detach: Some(Box::new(move || {
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                // Busy slot: the dead watcher is pruned on the next notify.
                if let Ok(mut slot) = slot.try_borrow_mut() {
                    slot.watchers.retain(|w| w.id != id);
                }
            })),
        }
    }

    /// Dirty-check counter for render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    /// Number of attached callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.slot
            .borrow()
            .watchers
            .iter()
            .filter(|w| w.live.get())
            .count()
    }

    /// Hand out a handle that can read and subscribe but not write.
    #[must_use]
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            source: self.clone(),
        }
    }

    fn notify(&self) {
        // No borrow may be held while callbacks run: they are free to read,
        // write or subscribe to this same observable.
        let (value, round) = {
            let mut slot = self.slot.borrow_mut();
            slot.watchers.retain(|w| w.live.get());
            let round: Vec<(Rc<Cell<bool>>, Callback<T>)> = slot
                .watchers
                .iter()
                .map(|w| (Rc::clone(&w.live), Rc::clone(&w.callback)))
                .collect();
            (slot.value.clone(), round)
        };
        if round.is_empty() {
            return;
        }

        let subscribers = round.len() as u64;
        let started = Instant::now();
        let _span = trace_span!("reactive.notify", subscribers).entered();
        for (live, callback) in &round {
            if live.get() {
                callback(&value);
            }
        }
        trace!(
            duration_us = started.elapsed().as_micros() as u64,
            subscribers, "observable propagated"
        );
    }
}

/// Read-only handle to an [`Observable`].
///
/// The owner keeps the writable `Observable`; everyone else gets a
/// `ReadSignal` and can only observe.
pub struct ReadSignal<T> {
    source: Observable<T>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ReadSignal").field(&self.source).finish()
    }
}

impl<T: Clone + PartialEq + 'static> ReadSignal<T> {
    #[must_use]
    pub fn get(&self) -> T {
        self.source.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.source.with(f)
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.source.subscribe(callback)
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.source.version()
    }
}

/// Keeps a callback attached to its observable.
pub struct Subscription {
    live: Rc<Cell<bool>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Whether the callback is still attached.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.set(false);
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.live.get())
            .finish()
    }
}
