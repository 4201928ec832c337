//! Shared pointer event source.
//!
//! `PointerEvents` stands for the environment-level stream of pointer moves
//! and releases (the window, in a browser). Any number of controllers share
//! one source and register listeners only while they are dragging.
//!
//! Registrations are scoped: `add_listener` returns a `ListenerGuard` and the
//! listener is removed when the guard drops.
//!
//! Dispatch snapshots the listener list first, so listeners may add or remove
//! registrations while an event is being delivered. A listener removed during
//! a dispatch is not called for the rest of that dispatch.

use crate::types::PointerEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Which pointer stream a listener is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Up,
}

pub type PointerListener = Rc<dyn Fn(&PointerEvent)>;

/// Identifier of one registration on a `PointerEvents` source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    kind: PointerEventKind,
    listener: PointerListener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Registration>,
}

impl Registry {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|r| r.id == id)
    }
}

/// Process-wide pointer event source shared by all controllers.
///
/// Cloning yields another handle to the same source.
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Rc<RefCell<Registry>>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind` events until the returned guard drops.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn add_listener(&self, kind: PointerEventKind, listener: impl Fn(&PointerEvent) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push(Registration {
            id,
            kind,
            listener: Rc::new(listener),
        });
        tracing::trace!(?id, ?kind, "Pointer listener attached");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer move to every move listener, in registration order.
    /// Returns how many listeners were called.
    pub fn dispatch_move(&self, event: PointerEvent) -> usize {
        self.dispatch(PointerEventKind::Move, event)
    }

    /// Deliver a pointer release to every release listener.
    pub fn dispatch_up(&self, event: PointerEvent) -> usize {
        self.dispatch(PointerEventKind::Up, event)
    }

    pub fn dispatch(&self, kind: PointerEventKind, event: PointerEvent) -> usize {
        let snapshot: Vec<(ListenerId, PointerListener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| (r.id, Rc::clone(&r.listener)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            listener(&event);
            delivered += 1;
        }
        delivered
    }

    /// Number of live registrations across both streams.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: PointerEventKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }
}

impl fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped registration on a `PointerEvents` source.
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // The listener itself is dropped after the borrow ends; its captures
        // may own other guards on this registry.
        let removed = {
            let mut registry = registry.borrow_mut();
            registry
                .listeners
                .iter()
                .position(|r| r.id == self.id)
                .map(|index| registry.listeners.remove(index))
        };
        if removed.is_some() {
            tracing::trace!(id = ?self.id, "Pointer listener detached");
        }
    }
}
