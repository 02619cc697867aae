//! Process-wide services the providers are built on.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`AppEnv`] and places it in context. Providers read it to
//! find storage for persisted slices, the window event hub, and the timer used
//! by debounced values. In the browser those are `localStorage`, the bridged
//! window listeners, and `setTimeout`; everywhere else they are in-memory
//! stand-ins so server rendering and native tests never touch the DOM.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use std::sync::Arc;

use leptos::prelude::*;
use slices::{Config, ContextError, EventHub, ManualScheduler, MemoryStorage, Storage, StorageKey, Timer};

use crate::util::browser::{BrowserStorage, BrowserTimer};

#[derive(Clone)]
pub struct AppEnv {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub hub: EventHub,
    pub timer: Arc<dyn Timer>,
}

impl std::fmt::Debug for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnv").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for AppEnv {
    fn default() -> Self {
        if cfg!(feature = "hydrate") { Self::browser() } else { Self::in_memory() }
    }
}

impl AppEnv {
    /// Browser services with configuration baked in at build time.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            config: config_from(build_time_var),
            storage: Arc::new(BrowserStorage),
            hub: EventHub::new(),
            timer: Arc::new(BrowserTimer),
        }
    }

    /// In-memory storage and a virtual-time scheduler.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            config: Config::default(),
            storage: Arc::new(MemoryStorage::new()),
            hub: EventHub::new(),
            timer: Arc::new(ManualScheduler::new()),
        }
    }

    /// Storage key for `name` under the configured namespace.
    #[must_use]
    pub fn key(&self, name: &str) -> StorageKey {
        StorageKey::new(&self.config.storage_namespace, name)
    }
}

/// Build-time value of a configuration variable. The browser has no process
/// environment, so `AGENTFLOW_*` overrides are read by `option_env!` when the
/// client is compiled.
pub fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "AGENTFLOW_STORAGE_NAMESPACE" => option_env!("AGENTFLOW_STORAGE_NAMESPACE"),
        "AGENTFLOW_DEBOUNCE_MS" => option_env!("AGENTFLOW_DEBOUNCE_MS"),
        "AGENTFLOW_TABLET_MIN" => option_env!("AGENTFLOW_TABLET_MIN"),
        "AGENTFLOW_DESKTOP_MIN" => option_env!("AGENTFLOW_DESKTOP_MIN"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Config from `lookup`, or the defaults with a warning when it is invalid.
pub fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Config {
    Config::from_lookup(lookup).unwrap_or_else(|err| {
        log::warn!("invalid configuration, using defaults: {err}");
        Config::default()
    })
}

/// The environment `App` provided.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when rendered outside `App`.
pub fn use_env() -> Result<AppEnv, ContextError> {
    use_context::<AppEnv>().ok_or_else(|| ContextError::MissingProvider {
        slice: "AppEnv",
        scope: "(no app)".to_owned(),
    })
}
