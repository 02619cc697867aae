//! Window-level event registry.
//!
//! ARCHITECTURE
//! ============
//! The browser client installs exactly one DOM listener per event kind and
//! forwards into an `EventHub`; hooks attach here instead of on `window`.
//! Each attachment is a [`Listener`] guard that detaches on drop, so repeated
//! mount/unmount cycles cannot accumulate handlers.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::lock;

/// Event kinds a handler can attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    MouseDown,
}

/// Identity of a tracked element. In the browser it is written to the
/// element's [`ELEMENT_ID_ATTR`] attribute so a press can be traced back to
/// every tracked ancestor of the node that received it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

/// DOM attribute carrying an [`ElementId`].
pub const ELEMENT_ID_ATTR: &str = "data-element-id";

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Parse an attribute value written by [`ElementId`]'s `Display`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse() {
            Ok(n) => Some(Self(n)),
            Err(_) => None,
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a press landed in the element tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PressTarget {
    /// No tree information; containment falls back to element bounds.
    #[default]
    Unknown,
    /// Tracked elements enclosing the pressed node, innermost first.
    Within(Vec<ElementId>),
}

/// A window event, in CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    Resize { width: u32, height: u32 },
    MouseDown { x: f64, y: f64, target: PressTarget },
}

impl WindowEvent {
    /// A press with no tree information.
    #[must_use]
    pub fn press(x: f64, y: f64) -> Self {
        Self::MouseDown { x, y, target: PressTarget::Unknown }
    }

    /// A press on a node enclosed by `ancestors`, innermost first.
    #[must_use]
    pub fn press_within(x: f64, y: f64, ancestors: Vec<ElementId>) -> Self {
        Self::MouseDown { x, y, target: PressTarget::Within(ancestors) }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::MouseDown { .. } => EventKind::MouseDown,
        }
    }
}

type Handler = Arc<dyn Fn(&WindowEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, EventKind, Handler)>,
}

/// Shared dispatch point for window events. Clones share one registry.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Arc<Mutex<Registry>>,
}

impl EventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` for `kind` until the returned guard is dropped.
    pub fn listen(&self, kind: EventKind, handler: impl Fn(&WindowEvent) + Send + Sync + 'static) -> Listener {
        let id = {
            let mut registry = lock(&self.registry);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, kind, Arc::new(handler)));
            id
        };
        tracing::trace!(?kind, id, "window listener attached");
        Listener { registry: Arc::downgrade(&self.registry), id, kind }
    }

    /// Deliver `event` to every handler of its kind. Returns how many ran.
    pub fn dispatch(&self, event: &WindowEvent) -> usize {
        let kind = event.kind();
        let handlers: Vec<Handler> = lock(&self.registry)
            .handlers
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, h)| Arc::clone(h))
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        lock(&self.registry).handlers.iter().filter(|(_, k, _)| *k == kind).count()
    }
}

/// Detach guard for one [`EventHub`] handler.
#[must_use = "dropping a Listener detaches the handler immediately"]
#[derive(Debug)]
pub struct Listener {
    registry: Weak<Mutex<Registry>>,
    id: u64,
    kind: EventKind,
}

impl Listener {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Detach now. Equivalent to dropping the guard.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.retain(|(id, _, _)| *id != self.id);
            tracing::trace!(kind = ?self.kind, id = self.id, "window listener detached");
        }
    }
}
