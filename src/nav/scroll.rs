//! Scroll event source with scoped subscriptions.
//!
//! Listeners are held by the source and removed when their [`Subscription`]
//! drops, so a torn-down component can never observe another event.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(f64)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    offset: f64,
}

/// Viewport scroll events. Single-threaded.
#[derive(Default)]
pub struct ScrollEvents {
    registry: Rc<RefCell<Registry>>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for the lifetime of the returned guard.
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a new vertical offset to every listener.
    ///
    /// Each listener is looked up again right before it runs, so one detached
    /// by an earlier listener in the same dispatch is not called. A listener
    /// that is already running (re-entrant dispatch) is skipped.
    pub fn dispatch(&self, offset: f64) {
        let ids: Vec<u64> = {
            let mut registry = self.registry.borrow_mut();
            registry.offset = offset;
            registry.listeners.iter().map(|(id, _)| *id).collect()
        };

        for id in ids {
            let Some(listener) = self.listener(id) else {
                continue;
            };
            if let Ok(mut f) = listener.try_borrow_mut() {
                (*f)(offset);
            }
        }
    }

    fn listener(&self, id: u64) -> Option<Listener> {
        self.registry
            .borrow()
            .listeners
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, l)| Rc::clone(l))
    }

    /// Last dispatched offset.
    pub fn offset(&self) -> f64 {
        self.registry.borrow().offset
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Attached listener. Detaches on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
