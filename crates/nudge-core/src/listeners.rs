#![forbid(unsafe_code)]

//! Listener registry with RAII subscriptions.
//!
//! [`Listeners`] is the subscription interface of the gesture state
//! machines. A caller registers a closure with [`Listeners::subscribe`] and
//! keeps the returned [`Subscription`] alive for as long as it wants events;
//! dropping the guard detaches the closure. This is how a mounted component
//! scopes its event-listener lifetime to its own.
//!
//! Single-threaded by construction (`Rc`/`RefCell`): recognizers live on the
//! UI thread together with their listeners.
//!
//! # Re-entrancy
//!
//! Listeners may subscribe, detach, or emit from inside a callback. A nested
//! `emit` skips the listener that is currently running instead of
//! re-entering it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of a registered listener, unique within one registry.
pub type ListenerId = u64;

type Callback<E> = Rc<RefCell<Box<dyn FnMut(&E)>>>;

struct Registry<E> {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Callback<E>)>,
}

/// A registry of event listeners.
pub struct Listeners<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Listeners<E> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `listener`. It stays attached until the returned guard is
    /// dropped or detached.
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry
                .entries
                .push((id, Rc::new(RefCell::new(Box::new(listener)))));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            id,
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().entries.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Deliver `event` to every listener, in subscription order.
    pub fn emit(&self, event: &E) {
        // Snapshot so callbacks can (un)subscribe while we iterate.
        let snapshot: Vec<Callback<E>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        for callback in snapshot {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut **callback)(event);
            }
        }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Whether no listener is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Detach every listener. Outstanding guards become inert.
    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.inner.borrow().entries.len())
            .finish()
    }
}

/// Guard for an attached listener. Dropping it detaches the listener.
pub struct Subscription {
    id: ListenerId,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Identifier of the listener within its registry.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Detach now. Equivalent to dropping the guard.
    pub fn detach(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emit_reaches_all_listeners_in_order() {
        let listeners = Listeners::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let log = Rc::clone(&log);
            listeners.subscribe(move |e| log.borrow_mut().push(("a", *e)))
        };
        let b = {
            let log = Rc::clone(&log);
            listeners.subscribe(move |e| log.borrow_mut().push(("b", *e)))
        };

        listeners.emit(&7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn dropping_guard_detaches() {
        let listeners = Listeners::<()>::new();
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let hits = Rc::clone(&hits);
            listeners.subscribe(move |_| hits.set(hits.get() + 1))
        };
        listeners.emit(&());
        drop(sub);
        listeners.emit(&());

        assert_eq!(hits.get(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn explicit_detach() {
        let listeners = Listeners::<()>::new();
        let sub = listeners.subscribe(|_| {});
        assert_eq!(listeners.len(), 1);
        sub.detach();
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn guard_outliving_registry_is_inert() {
        let listeners = Listeners::<()>::new();
        let sub = listeners.subscribe(|_| {});
        drop(listeners);
        drop(sub);
    }

    #[test]
    fn clear_detaches_everything() {
        let listeners = Listeners::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = Rc::clone(&hits);
            listeners.subscribe(move |_| hits.set(hits.get() + 1))
        };
        listeners.clear();
        listeners.emit(&());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_can_detach_itself_during_emit() {
        let listeners = Listeners::<()>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let slot = Rc::clone(&slot);
            let hits = Rc::clone(&hits);
            listeners.subscribe(move |_| {
                hits.set(hits.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn nested_emit_skips_running_listener() {
        let listeners = Rc::new(Listeners::<u8>::new());
        let hits = Rc::new(Cell::new(0));

        let _sub = {
            let inner = Rc::clone(&listeners);
            let hits = Rc::clone(&hits);
            listeners.subscribe(move |depth| {
                hits.set(hits.get() + 1);
                if *depth == 0 {
                    inner.emit(&1);
                }
            })
        };

        listeners.emit(&0);
        assert_eq!(hits.get(), 1);
    }
}
