//! A single owned piece of cross-cutting state.
//!
//! DESIGN
//! ======
//! A `Slice<T>` is a cheap handle onto one shared cell. Cells are only ever
//! created by [`Scope::provide`](crate::Scope::provide), so every slice has
//! exactly one owning scope and only that scope can dispose it. Handles given
//! to consumers can read, mutate, and subscribe, but the cell dies with its
//! scope; afterwards every call reports [`ContextError::Unmounted`].
//!
//! Mutation is always a functional update evaluated under the cell lock:
//! the closure sees the committed previous value and returns the next one,
//! so rapid successive updates compose instead of overwriting each other.
//! Listeners run after the lock is released and receive the committed value.
//! A listener may itself update the slice; once that newer revision has been
//! delivered, the rest of the outer delivery is dropped so no listener ends
//! on a stale value.

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;

use std::any::type_name;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::error::ContextError;
use crate::lock;

/// Bound shared by every value stored in a slice.
pub trait SliceValue: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> SliceValue for T {}

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Lifecycle position of a live slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Initial value installed by the provider; never mutated.
    Hydrated,
    /// At least one update has been committed.
    Mutated { revision: u64 },
}

struct Cell<T> {
    value: T,
    revision: u64,
    disposed: bool,
}

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

struct Shared<T> {
    cell: Mutex<Cell<T>>,
    listeners: Mutex<Listeners<T>>,
    /// Newest revision whose delivery has started.
    delivered: AtomicU64,
}

/// Handle onto one context slice.
pub struct Slice<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self { shared: Arc::clone(&self.shared) }
    }
}

impl<T> std::fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slice").field("kind", &type_name::<T>()).finish_non_exhaustive()
    }
}

impl<T: SliceValue> Slice<T> {
    pub(crate) fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                cell: Mutex::new(Cell { value: initial, revision: 0, disposed: false }),
                listeners: Mutex::new(Listeners { next_id: 0, entries: Vec::new() }),
                delivered: AtomicU64::new(0),
            }),
        }
    }

    /// Type name of the stored value, used in errors and logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        type_name::<T>()
    }

    /// Clone out the current value.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn get(&self) -> Result<T, ContextError> {
        self.with(T::clone)
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, ContextError> {
        let cell = lock(&self.shared.cell);
        if cell.disposed {
            return Err(self.unmounted());
        }
        Ok(f(&cell.value))
    }

    /// Apply a functional update and notify subscribers. Returns the new revision.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Result<u64, ContextError> {
        let (snapshot, revision) = {
            let mut cell = lock(&self.shared.cell);
            if cell.disposed {
                return Err(self.unmounted());
            }
            let next = f(&cell.value);
            cell.value = next;
            cell.revision += 1;
            (cell.value.clone(), cell.revision)
        };
        self.notify(&snapshot, revision);
        Ok(revision)
    }

    /// Replace the value outright.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn set(&self, next: T) -> Result<u64, ContextError> {
        self.update(move |_| next)
    }

    /// Edit a copy of the previous value in place, then commit it.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn patch(&self, edit: impl FnOnce(&mut T)) -> Result<u64, ContextError> {
        self.update(move |prev| {
            let mut next = prev.clone();
            edit(&mut next);
            next
        })
    }

    /// Number of committed updates since the provider mounted.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn revision(&self) -> Result<u64, ContextError> {
        let cell = lock(&self.shared.cell);
        if cell.disposed {
            return Err(self.unmounted());
        }
        Ok(cell.revision)
    }

    /// Current lifecycle phase.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn phase(&self) -> Result<Phase, ContextError> {
        Ok(match self.revision()? {
            0 => Phase::Hydrated,
            revision => Phase::Mutated { revision },
        })
    }

    /// Whether the owning scope is still mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !lock(&self.shared.cell).disposed
    }

    /// Register a listener invoked with the committed value after every update.
    ///
    /// The listener stays attached until the returned [`Subscription`] is
    /// dropped or the owning scope unmounts.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Unmounted`] once the owning scope is gone.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Result<Subscription, ContextError> {
        if !self.is_live() {
            return Err(self.unmounted());
        }
        let id = {
            let mut listeners = lock(&self.shared.listeners);
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, Arc::new(listener)));
            id
        };
        tracing::trace!(slice = type_name::<T>(), id, "listener attached");

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Ok(Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                lock(&shared.listeners).entries.retain(|(entry_id, _)| *entry_id != id);
                tracing::trace!(slice = type_name::<T>(), id, "listener detached");
            }
        }))
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared.listeners).entries.len()
    }

    /// True when both handles point at the same slice.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    pub(crate) fn dispose(&self) {
        lock(&self.shared.cell).disposed = true;
        lock(&self.shared.listeners).entries.clear();
    }

    fn notify(&self, snapshot: &T, revision: u64) {
        self.shared.delivered.fetch_max(revision, Ordering::AcqRel);
        let listeners: Vec<Listener<T>> =
            lock(&self.shared.listeners).entries.iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            if self.shared.delivered.load(Ordering::Acquire) > revision {
                tracing::trace!(slice = type_name::<T>(), revision, "superseded delivery dropped");
                return;
            }
            listener(snapshot);
        }
    }

    fn unmounted(&self) -> ContextError {
        ContextError::Unmounted { slice: type_name::<T>() }
    }
}

/// Detach guard returned by [`Slice::subscribe`].
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub(crate) fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    /// Detach now. Equivalent to dropping the guard.
    pub fn unsubscribe(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("attached", &self.detach.is_some()).finish()
    }
}
