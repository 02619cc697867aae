//! Browser-backed storage and timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both types are zero-sized and look the browser object up on every call,
//! so they satisfy the `Send + Sync` bounds of the core traits even though
//! `web_sys` handles are not thread-safe. Outside the browser, storage
//! reports `Unavailable` and scheduled tasks never fire.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::time::Duration;

use slices::{Storage, StorageError, Task, Timer, TimerHandle};

/// Window size used when no browser window exists.
pub const FALLBACK_SIZE: (u32, u32) = (1280, 800);

/// `localStorage` as a [`Storage`] backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    let message = format!("{err:?}");
    if message.contains("QuotaExceeded") {
        StorageError::QuotaExceeded(message)
    } else {
        StorageError::Backend(message)
    }
}

/// `setTimeout` as a [`Timer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        #[cfg(feature = "hydrate")]
        {
            match leptos::prelude::set_timeout_with_handle(task, delay) {
                Ok(handle) => TimerHandle::new(move || handle.clear()),
                Err(err) => {
                    log::warn!("setTimeout failed: {err:?}");
                    TimerHandle::inert()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop((delay, task));
            TimerHandle::inert()
        }
    }
}

/// Current inner window size in CSS pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn window_size() -> (u32, u32) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return FALLBACK_SIZE;
        };
        let px = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: u32| {
            value.ok().and_then(|v| v.as_f64()).map_or(fallback, |v| v.max(0.0) as u32)
        };
        (px(window.inner_width(), FALLBACK_SIZE.0), px(window.inner_height(), FALLBACK_SIZE.1))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_SIZE
    }
}
