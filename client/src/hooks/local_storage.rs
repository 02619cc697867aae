//! A signal mirrored to storage under a namespaced key.
//!
//! Reads fall back to the initial value when the key is missing, the stored
//! JSON is malformed, or storage is unavailable. Writes update the signal
//! first and persist best-effort.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use slices::{ContextError, Storage, StorageKey, load_json, save_json};

use crate::env::use_env;

/// Copyable `[value, setValue]` pair over one storage key.
pub struct PersistedSignal<T: Send + Sync + 'static> {
    value: RwSignal<T>,
    backend: StoredValue<(Arc<dyn Storage>, StorageKey)>,
}

impl<T: Send + Sync + 'static> Clone for PersistedSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PersistedSignal<T> {}

impl<T> PersistedSignal<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Hydrate from `storage`, falling back to `initial`.
    pub fn open(storage: Arc<dyn Storage>, key: StorageKey, initial: T) -> Self {
        let value = load_json(storage.as_ref(), &key).unwrap_or(initial);
        Self { value: RwSignal::new(value), backend: StoredValue::new((storage, key)) }
    }

    /// Current value; tracks changes.
    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn set(&self, next: T) {
        self.persist(&next);
        self.value.set(next);
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.value.with_untracked(f);
        self.set(next);
    }

    /// Drop the stored copy; the in-memory value is kept.
    pub fn remove(&self) {
        self.backend.with_value(|(storage, key)| {
            if let Err(err) = storage.remove_item(key.as_str()) {
                log::warn!("failed to remove {key}: {err}");
            }
        });
    }

    fn persist(&self, value: &T) {
        self.backend.with_value(|(storage, key)| {
            save_json(storage.as_ref(), key, value);
        });
    }
}

/// Open `name` under the configured namespace in the app's storage.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when no `AppEnv` is in context.
pub fn use_local_storage<T>(name: &str, initial: T) -> Result<PersistedSignal<T>, ContextError>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let env = use_env()?;
    let key = env.key(name);
    Ok(PersistedSignal::open(env.storage, key, initial))
}
