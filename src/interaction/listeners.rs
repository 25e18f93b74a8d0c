//! Window-level event target with scoped listener registration.
//!
//! Listeners are owned by [`ListenerGuard`]s; dropping a guard deregisters its
//! handler, so a view that is mounted and unmounted repeatedly never leaves
//! stale handlers behind.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::Value;

/// Events delivered by the host window.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    KeyDown { key: String },
    Message { origin: String, data: Value },
}

impl HostEvent {
    #[must_use]
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    #[must_use]
    pub fn message(origin: impl Into<String>, data: Value) -> Self {
        Self::Message {
            origin: origin.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Rc<RefCell<dyn FnMut(&HostEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(ListenerId, Handler)>,
}

/// Single-threaded event target, cloned handles share one registry.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl EventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every dispatched event until the guard is dropped.
    #[must_use = "dropping the guard immediately deregisters the listener"]
    pub fn subscribe<F>(&self, handler: F) -> ListenerGuard
    where
        F: FnMut(&HostEvent) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry
            .handlers
            .push((id, Rc::new(RefCell::new(handler)) as Handler));
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to the listeners registered when dispatch starts.
    ///
    /// Handlers may subscribe or drop guards while running; the change applies
    /// from the next dispatch.
    pub fn dispatch(&self, event: &HostEvent) {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut *handler)(event);
            }
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Deregisters its listener on drop.
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}
