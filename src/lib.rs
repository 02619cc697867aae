//! Typed context slices for the agentflow client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The agent-builder UI shares cross-cutting state (theme, canvas geometry,
//! node catalog, agents, templates, variables, marketplace filters) with
//! deeply nested components. This crate is the framework-agnostic core of
//! that sharing:
//!
//! - [`Scope`]: a node in the composition tree; owns the slices its providers
//!   installed and resolves consumers to the nearest enclosing provider.
//! - [`Slice`]: one owned piece of state with functional updates and
//!   subscribe/unsubscribe notification.
//! - [`Composer`]: a layout's hard-wired list of providers, with declared
//!   dependencies checked at mount time.
//! - Utilities the providers build on: [`Debouncer`], persisted slices over
//!   [`Storage`], the window [`EventHub`], [`OutsideClick`], and viewport
//!   [`Breakpoint`] tracking.
//!
//! The `client` crate binds these to Leptos components and browser APIs.

pub mod breakpoint;
pub mod composer;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod outside_click;
pub mod scope;
pub mod slice;
pub mod storage;
pub mod timer;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use breakpoint::{Breakpoint, Breakpoints, Viewport, ViewportProvider, track_viewport};
pub use composer::{Composer, PersistedProvider, ProviderSpec, SliceProvider};
pub use config::Config;
pub use debounce::{Debouncer, debounce_into};
pub use error::{ConfigError, ContextError, StorageError};
pub use events::{ELEMENT_ID_ATTR, ElementId, EventHub, EventKind, Listener, PressTarget, WindowEvent};
pub use outside_click::{ElementRef, OutsideClick, Rect};
pub use scope::{Scope, SliceKind};
pub use slice::{Phase, Slice, SliceValue, Subscription};
pub use storage::{MemoryStorage, Storage, StorageKey, load_json, save_json};
pub use timer::{ManualScheduler, Task, Timer, TimerHandle};

/// Lock a mutex, recovering the data if a panicking holder poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
