//! Layout-level composition of providers around a subtree.
//!
//! DESIGN
//! ======
//! A `Composer` is a hard-wired, ordered list of providers. Mounting creates
//! one child scope and runs each provider into it in declaration order.
//! Ordering is only meaningful where a provider declares it: `requires()`
//! names the slice kinds that must already resolve (from an earlier provider
//! in the same composer or from an ancestor), and mounting fails with
//! [`ContextError::MissingDependency`] otherwise. A failed mount tears the
//! half-built scope down before returning.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ContextError;
use crate::scope::{Scope, SliceKind};
use crate::slice::SliceValue;
use crate::storage::{Storage, StorageKey};

/// One mountable provider.
pub trait ProviderSpec: Send + Sync {
    /// Label used in logs and dependency errors.
    fn name(&self) -> &str;

    /// The slice kind this provider installs.
    fn provides(&self) -> SliceKind;

    /// Slice kinds that must resolve before this provider mounts.
    fn requires(&self) -> Vec<SliceKind> {
        Vec::new()
    }

    /// Install the slice (and any teardown work) into `scope`.
    ///
    /// # Errors
    ///
    /// Whatever [`Scope::provide`] reports.
    fn mount(&self, scope: &Scope) -> Result<(), ContextError>;
}

type Init<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Provider that installs a freshly initialized value.
pub struct SliceProvider<T> {
    name: String,
    init: Init<T>,
    requires: Vec<SliceKind>,
}

impl<T: SliceValue> SliceProvider<T> {
    pub fn new(name: impl Into<String>, init: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self { name: name.into(), init: Arc::new(init), requires: Vec::new() }
    }

    /// Declare that `U` must be resolvable when this provider mounts.
    #[must_use]
    pub fn requiring<U: SliceValue>(mut self) -> Self {
        self.requires.push(SliceKind::of::<U>());
        self
    }
}

impl<T: SliceValue> ProviderSpec for SliceProvider<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> SliceKind {
        SliceKind::of::<T>()
    }

    fn requires(&self) -> Vec<SliceKind> {
        self.requires.clone()
    }

    fn mount(&self, scope: &Scope) -> Result<(), ContextError> {
        scope.provide((self.init)()).map(|_| ())
    }
}

/// Provider that installs a storage-backed slice.
pub struct PersistedProvider<T> {
    name: String,
    storage: Arc<dyn Storage>,
    key: StorageKey,
    init: Init<T>,
}

impl<T> PersistedProvider<T>
where
    T: SliceValue + Serialize + DeserializeOwned,
{
    pub fn new(
        name: impl Into<String>,
        storage: Arc<dyn Storage>,
        key: StorageKey,
        init: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), storage, key, init: Arc::new(init) }
    }
}

impl<T> ProviderSpec for PersistedProvider<T>
where
    T: SliceValue + Serialize + DeserializeOwned,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> SliceKind {
        SliceKind::of::<T>()
    }

    fn mount(&self, scope: &Scope) -> Result<(), ContextError> {
        scope
            .provide_persisted(Arc::clone(&self.storage), self.key.clone(), (self.init)())
            .map(|_| ())
    }
}

/// Ordered set of providers mounted together around a subtree.
#[derive(Clone)]
pub struct Composer {
    label: String,
    providers: Vec<Arc<dyn ProviderSpec>>,
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("label", &self.label)
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl Composer {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), providers: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, provider: impl ProviderSpec + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Slice kinds a descendant of the mounted scope can resolve from this composer.
    #[must_use]
    pub fn kinds(&self) -> Vec<SliceKind> {
        self.providers.iter().map(|p| p.provides()).collect()
    }

    /// Mount every provider into a new scope under `parent` (or a new root).
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingDependency`] when a declared requirement does not
    /// resolve at its provider's position, or any error a provider reports.
    pub fn mount(&self, parent: Option<&Scope>) -> Result<Scope, ContextError> {
        let scope = match parent {
            Some(parent) => parent.child(self.label.clone()),
            None => Scope::root(self.label.clone()),
        };
        for provider in &self.providers {
            if let Err(err) = mount_one(provider.as_ref(), &scope) {
                tracing::warn!(composer = %self.label, provider = provider.name(), error = %err, "composer mount failed");
                scope.unmount();
                return Err(err);
            }
        }
        tracing::debug!(composer = %self.label, providers = self.providers.len(), "composer mounted");
        Ok(scope)
    }
}

fn mount_one(provider: &dyn ProviderSpec, scope: &Scope) -> Result<(), ContextError> {
    if let Some(missing) = provider.requires().into_iter().find(|kind| !scope.resolves(*kind)) {
        return Err(ContextError::MissingDependency { provider: provider.name().to_owned(), slice: missing.name() });
    }
    provider.mount(scope)
}
