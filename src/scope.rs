//! Composition tree of provider scopes.
//!
//! DESIGN
//! ======
//! A `Scope` is one node in an ownership tree. Each node owns the slices its
//! providers installed and the teardown work they registered. Consumers
//! resolve a slice kind by walking from their scope towards the root and
//! binding to the nearest node that provides it; when nothing does, the
//! resolver reports [`ContextError::MissingProvider`] instead of handing out
//! a fabricated default.
//!
//! Parents hold their children weakly and children hold their parent
//! strongly, so a subtree keeps its ancestors alive but an unmounted parent
//! still tears down every child it knows about.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::error::ContextError;
use crate::lock;
use crate::slice::{Slice, SliceValue};

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a slice kind, used for declared provider requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SliceKind {
    id: TypeId,
    name: &'static str,
}

impl SliceKind {
    #[must_use]
    pub fn of<T: SliceValue>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

trait ErasedSlice: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn dispose(&self);
}

impl<T: SliceValue> ErasedSlice for Slice<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dispose(&self) {
        Slice::dispose(self);
    }
}

struct Entry {
    kind: SliceKind,
    slice: Box<dyn ErasedSlice>,
}

#[derive(Default)]
struct ScopeState {
    mounted: bool,
    entries: Vec<Entry>,
    index: HashMap<TypeId, usize>,
    cleanups: Vec<Box<dyn FnOnce() + Send>>,
    children: Vec<Weak<Node>>,
}

struct Node {
    id: u64,
    label: String,
    parent: Option<Scope>,
    state: Mutex<ScopeState>,
}

/// One node of the composition tree.
#[derive(Clone)]
pub struct Scope {
    node: Arc<Node>,
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.node.id)
            .field("label", &self.node.label)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Scope {}

impl Scope {
    /// Create a root scope with no ancestors.
    #[must_use]
    pub fn root(label: impl Into<String>) -> Self {
        Self::with_parent(label.into(), None, true)
    }

    /// Create a nested scope that resolves through `self`.
    ///
    /// A child of an unmounted scope starts unmounted.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut state = lock(&self.node.state);
        let child = Self::with_parent(label.into(), Some(self.clone()), state.mounted);
        if state.mounted {
            state.children.retain(|c| c.strong_count() > 0);
            state.children.push(Arc::downgrade(&child.node));
        }
        drop(state);
        child
    }

    fn with_parent(label: String, parent: Option<Scope>, mounted: bool) -> Self {
        let id = NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed);
        if mounted {
            tracing::debug!(scope = %label, id, "scope mounted");
        } else {
            tracing::debug!(scope = %label, id, "scope created under unmounted parent");
        }
        Self {
            node: Arc::new(Node {
                id,
                label,
                parent,
                state: Mutex::new(ScopeState { mounted, ..ScopeState::default() }),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.node.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.node.label
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Scope> {
        self.node.parent.as_ref()
    }

    /// Distance from the root (root is 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), |s| s.parent()).count()
    }

    /// Labels from the root down to this scope, joined with `/`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut labels: Vec<&str> =
            std::iter::successors(Some(self), |s| s.parent()).map(Scope::label).collect();
        labels.reverse();
        labels.join("/")
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        lock(&self.node.state).mounted
    }

    // =========================================================================
    // PROVIDING
    // =========================================================================

    /// Install a slice of kind `T` owned by this scope.
    ///
    /// # Errors
    ///
    /// [`ContextError::DuplicateProvider`] when this scope already owns a `T`,
    /// [`ContextError::Unmounted`] when the scope is gone.
    pub fn provide<T: SliceValue>(&self, initial: T) -> Result<Slice<T>, ContextError> {
        let kind = SliceKind::of::<T>();
        let mut state = lock(&self.node.state);
        if !state.mounted {
            return Err(ContextError::Unmounted { slice: kind.name });
        }
        if state.index.contains_key(&kind.id) {
            return Err(ContextError::DuplicateProvider { slice: kind.name, scope: self.path() });
        }
        let slice = Slice::new(initial);
        let position = state.entries.len();
        state.index.insert(kind.id, position);
        state.entries.push(Entry { kind, slice: Box::new(slice.clone()) });
        drop(state);
        tracing::debug!(scope = %self.node.label, slice = kind.name, "slice provided");
        Ok(slice)
    }

    /// Install a slice whose initial value is computed lazily.
    ///
    /// # Errors
    ///
    /// Same as [`Scope::provide`].
    pub fn provide_with<T: SliceValue>(&self, init: impl FnOnce() -> T) -> Result<Slice<T>, ContextError> {
        self.provide(init())
    }

    /// Whether this scope itself (not an ancestor) owns a `T`.
    #[must_use]
    pub fn provides<T: SliceValue>(&self) -> bool {
        lock(&self.node.state).index.contains_key(&TypeId::of::<T>())
    }

    /// Slice kinds owned directly by this scope, in provide order.
    #[must_use]
    pub fn kinds(&self) -> Vec<SliceKind> {
        lock(&self.node.state).entries.iter().map(|e| e.kind).collect()
    }

    // =========================================================================
    // RESOLVING
    // =========================================================================

    /// Bind to the nearest enclosing slice of kind `T`.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingProvider`] when no scope on the path to the root
    /// provides `T`; [`ContextError::Unmounted`] when this scope is gone.
    pub fn resolve<T: SliceValue>(&self) -> Result<Slice<T>, ContextError> {
        if !self.is_mounted() {
            return Err(ContextError::Unmounted { slice: type_name::<T>() });
        }
        self.try_resolve::<T>().ok_or_else(|| {
            tracing::debug!(scope = %self.path(), slice = type_name::<T>(), "unresolved consumer");
            ContextError::MissingProvider { slice: type_name::<T>(), scope: self.path() }
        })
    }

    /// Like [`Scope::resolve`], for consumers that treat absence as normal.
    #[must_use]
    pub fn try_resolve<T: SliceValue>(&self) -> Option<Slice<T>> {
        std::iter::successors(Some(self), |s| s.parent()).find_map(|scope| scope.local::<T>())
    }

    /// Whether a slice of `kind` is resolvable from this scope.
    #[must_use]
    pub fn resolves(&self, kind: SliceKind) -> bool {
        std::iter::successors(Some(self), |s| s.parent())
            .any(|scope| lock(&scope.node.state).index.contains_key(&kind.id))
    }

    fn local<T: SliceValue>(&self) -> Option<Slice<T>> {
        let state = lock(&self.node.state);
        let &position = state.index.get(&TypeId::of::<T>())?;
        state.entries[position].slice.as_any().downcast_ref::<Slice<T>>().cloned()
    }

    // =========================================================================
    // TEARDOWN
    // =========================================================================

    /// Register work to run when this scope unmounts.
    ///
    /// Runs immediately when the scope is already unmounted.
    pub fn on_cleanup(&self, cleanup: impl FnOnce() + Send + 'static) {
        let mut state = lock(&self.node.state);
        if state.mounted {
            state.cleanups.push(Box::new(cleanup));
        } else {
            drop(state);
            cleanup();
        }
    }

    /// Unmount children, run cleanups in reverse registration order, then
    /// dispose every owned slice. Calling it again is a no-op.
    pub fn unmount(&self) {
        let (children, cleanups, entries) = {
            let mut state = lock(&self.node.state);
            if !state.mounted {
                return;
            }
            state.mounted = false;
            state.index.clear();
            (
                std::mem::take(&mut state.children),
                std::mem::take(&mut state.cleanups),
                std::mem::take(&mut state.entries),
            )
        };

        for child in children.iter().rev().filter_map(Weak::upgrade) {
            Scope { node: child }.unmount();
        }
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
        for entry in entries.iter().rev() {
            entry.slice.dispose();
        }
        tracing::debug!(scope = %self.node.label, id = self.node.id, slices = entries.len(), "scope unmounted");
    }
}
