//! Reactive binding from a component to the nearest provided slice.
//!
//! DESIGN
//! ======
//! A binding resolves the slice once, when the component runs, then
//! subscribes a counter signal to it. Reads through the binding track that
//! counter, so any update committed to the slice (from any consumer) reruns
//! the reading closures. The subscription is released on the owner's
//! cleanup, so a remounted consumer never leaves a stale listener behind.

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;

use leptos::prelude::*;
use slices::{ContextError, Scope, Slice, SliceKind, SliceValue};

/// Copyable handle to a resolved slice for use inside view closures.
pub struct SliceBinding<T: SliceValue> {
    slice: StoredValue<Slice<T>>,
    tick: RwSignal<u64>,
}

impl<T: SliceValue> Clone for SliceBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SliceValue> Copy for SliceBinding<T> {}

impl<T: SliceValue> SliceBinding<T> {
    /// Current value; tracks updates.
    ///
    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn get(&self) -> Result<T, ContextError> {
        self.tick.track();
        self.with_slice(Slice::get)
    }

    /// Current value without tracking, for event handlers and setup code.
    ///
    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn peek(&self) -> Result<T, ContextError> {
        self.with_slice(Slice::get)
    }

    /// Borrow the current value; tracks updates.
    ///
    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, ContextError> {
        self.tick.track();
        self.with_slice(|slice| slice.with(f))
    }

    /// Functional update; every binding on the slice is notified.
    ///
    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Result<u64, ContextError> {
        self.with_slice(|slice| slice.update(f))
    }

    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn set(&self, next: T) -> Result<u64, ContextError> {
        self.with_slice(|slice| slice.set(next))
    }

    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn patch(&self, edit: impl FnOnce(&mut T)) -> Result<u64, ContextError> {
        self.with_slice(|slice| slice.patch(edit))
    }

    /// Revision of the slice; tracks updates.
    ///
    /// # Errors
    ///
    /// [`ContextError::Unmounted`] once the providing scope is gone.
    pub fn revision(&self) -> Result<u64, ContextError> {
        self.tick.track();
        self.with_slice(Slice::revision)
    }

    /// The underlying slice, while the owning component is alive.
    pub fn slice(&self) -> Option<Slice<T>> {
        self.slice.try_get_value()
    }

    fn with_slice<R>(&self, f: impl FnOnce(&Slice<T>) -> Result<R, ContextError>) -> Result<R, ContextError> {
        self.slice
            .try_with_value(f)
            .unwrap_or_else(|| Err(ContextError::Unmounted { slice: SliceKind::of::<T>().name() }))
    }
}

impl<T: SliceValue + Default> SliceBinding<T> {
    /// Current value for rendering. A read after unmount renders the default.
    pub fn value(&self) -> T {
        self.get().unwrap_or_else(|err| {
            log::debug!("{err}; rendering default");
            T::default()
        })
    }
}

/// The nearest scope a provider placed in context.
pub fn use_scope() -> Option<Scope> {
    use_context::<Scope>()
}

/// Resolve `T` from the nearest enclosing provider and bind it to this owner.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when no enclosing scope provides `T`.
pub fn use_slice<T: SliceValue>() -> Result<SliceBinding<T>, ContextError> {
    let Some(scope) = use_scope() else {
        return Err(ContextError::MissingProvider { slice: SliceKind::of::<T>().name(), scope: "(none)".to_owned() });
    };
    bind(&scope.resolve::<T>()?)
}

/// Bind an already-resolved slice to the current owner.
///
/// # Errors
///
/// [`ContextError::Unmounted`] when the slice is already disposed.
pub fn bind<T: SliceValue>(slice: &Slice<T>) -> Result<SliceBinding<T>, ContextError> {
    let tick = RwSignal::new(0_u64);
    let subscription = slice.subscribe(move |_| {
        tick.try_update(|n| *n = n.wrapping_add(1));
    })?;
    on_cleanup(move || subscription.unsubscribe());
    Ok(SliceBinding { slice: StoredValue::new(slice.clone()), tick })
}
