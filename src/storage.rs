//! Key/value persistence for slices that survive reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client backs [`Storage`] with `localStorage`; tests and server
//! rendering use [`MemoryStorage`]. Values are JSON. Persistence is
//! best-effort: read or parse failures fall back to the caller's initial value
//! and write failures are logged, never surfaced.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ContextError, StorageError};
use crate::lock;
use crate::scope::Scope;
use crate::slice::{Slice, SliceValue};

/// Synchronous string key/value store.
pub trait Storage: Send + Sync {
    /// # Errors
    ///
    /// Backend-specific read failure.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Backend-specific write failure.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Backend-specific write failure.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Namespaced storage key, rendered as `namespace:name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        Self(format!("{namespace}:{name}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

#[derive(Default)]
struct MemoryState {
    items: HashMap<String, String>,
    unavailable: bool,
}

/// In-process [`Storage`]. Clones share the same items, which is how tests
/// simulate a reload: drop every scope, then hydrate again from a clone.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `key` with a raw, possibly malformed payload.
    pub fn corrupt(&self, key: &str, raw: &str) {
        lock(&self.state).items.insert(key.to_owned(), raw.to_owned());
    }

    /// Raw stored payload for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        lock(&self.state).items.get(key).cloned()
    }

    /// Make every call fail with [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        lock(&self.state).unavailable = unavailable;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.state).items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = lock(&self.state);
        if state.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(state.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = lock(&self.state);
        if state.unavailable {
            return Err(StorageError::Unavailable);
        }
        state.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut state = lock(&self.state);
        if state.unavailable {
            return Err(StorageError::Unavailable);
        }
        state.items.remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Load a JSON value for `key`. Missing keys, backend failures, and malformed
/// payloads all yield `None`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &StorageKey) -> Option<T> {
    let raw = match storage.get_item(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(%key, error = %err, "storage read failed; using initial value");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%key, error = %err, "stored value is malformed; using initial value");
            None
        }
    }
}

/// Save `value` as JSON under `key`. Returns whether the write landed.
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &StorageKey, value: &T) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(%key, error = %err, "value could not be serialized");
            return false;
        }
    };
    match storage.set_item(key.as_str(), &raw) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%key, error = %err, "storage write failed");
            false
        }
    }
}

// =============================================================================
// PERSISTED SLICES
// =============================================================================

impl Scope {
    /// Install a slice hydrated from `storage` and mirrored back on every update.
    ///
    /// The mirror is released when the scope unmounts.
    ///
    /// # Errors
    ///
    /// Same as [`Scope::provide`]; storage failures never surface here.
    pub fn provide_persisted<T>(
        &self,
        storage: Arc<dyn Storage>,
        key: StorageKey,
        initial: T,
    ) -> Result<Slice<T>, ContextError>
    where
        T: SliceValue + Serialize + DeserializeOwned,
    {
        let hydrated = load_json::<T>(storage.as_ref(), &key);
        let from_storage = hydrated.is_some();
        let slice = self.provide(hydrated.unwrap_or(initial))?;
        tracing::debug!(%key, from_storage, "persisted slice hydrated");

        let mirror = slice.subscribe(move |value: &T| {
            save_json(storage.as_ref(), &key, value);
        })?;
        self.on_cleanup(move || mirror.unsubscribe());
        Ok(slice)
    }
}
