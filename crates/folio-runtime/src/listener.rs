#![forbid(unsafe_code)]

//! Scoped event listeners.
//!
//! [`EventTarget`] plays the role of the page window: the host dispatches
//! [`Event`]s into it and every listener registered for that event's
//! [`EventKind`] runs, in registration order. Registration returns a
//! [`ListenerGuard`]; dropping the guard removes the listener. Guards drop
//! during unwinding too, so a component that panics mid-lifetime still
//! leaves no listener behind.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::event::{DefaultAction, Event, EventKind};
use tracing::trace;

type Callback = Rc<dyn Fn(&Event) -> DefaultAction>;

struct Entry {
    id: u64,
    kind: EventKind,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Per-kind listener registry.
#[derive(Clone, Default)]
pub struct EventTarget {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.registry.borrow().entries.len())
            .finish()
    }
}

impl EventTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for events of `kind`.
    #[must_use = "dropping the guard removes the listener immediately"]
    pub fn add_listener(
        &self,
        kind: EventKind,
        callback: impl Fn(&Event) -> DefaultAction + 'static,
    ) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            kind,
            callback: Rc::new(callback),
        });
        trace!(id, kind = kind.as_str(), "listener attached");
        ListenerGuard {
            registry: Rc::downgrade(&self.registry),
            id,
            kind,
        }
    }

    /// Run every listener registered for the event's kind.
    ///
    /// Returns [`DefaultAction::Prevent`] if any listener prevented the
    /// default.
    pub fn dispatch(&self, event: &Event) -> DefaultAction {
        let kind = event.kind();
        let callbacks: Vec<Callback> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| Rc::clone(&e.callback))
            .collect();

        callbacks
            .iter()
            .fold(DefaultAction::Allow, |acc, cb| acc.merge(cb(event)))
    }

    /// Number of listeners currently attached for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }

    /// Number of listeners attached across all kinds.
    #[must_use]
    pub fn total_listeners(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// RAII registration handle; dropping it detaches the listener.
pub struct ListenerGuard {
    registry: Weak<RefCell<Registry>>,
    id: u64,
    kind: EventKind,
}

impl ListenerGuard {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The target may already be gone; nothing to detach then.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // A guard dropped from inside a listener runs outside the dispatch
        // borrow, so this cannot conflict.
        if let Ok(mut registry) = registry.try_borrow_mut() {
            registry.entries.retain(|e| e.id != self.id);
            trace!(id = self.id, kind = self.kind.as_str(), "listener detached");
        }
    }
}
