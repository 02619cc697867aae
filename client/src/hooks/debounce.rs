//! Debounced signals for search boxes and filter inputs.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use slices::{ContextError, Debouncer, SliceValue, Timer};

use crate::env::use_env;

/// Signal that trails `initial`'s source by `delay`, plus the debouncer
/// feeding it. Pending commits are cancelled on cleanup.
pub fn debounced_signal<T: SliceValue>(initial: T, timer: Arc<dyn Timer>, delay: Duration) -> (ReadSignal<T>, Debouncer<T>) {
    let (debounced, set_debounced) = signal(initial);
    let debouncer = Debouncer::new(timer, delay, move |value| {
        if set_debounced.try_set(value).is_some() {
            log::debug!("debounced value arrived after cleanup");
        }
    });
    let pending = debouncer.clone();
    on_cleanup(move || pending.cancel());
    (debounced, debouncer)
}

/// Follow `value`, committing only after it stays unchanged for `delay`.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when no `AppEnv` is in context.
pub fn use_debounce<T: SliceValue>(value: Signal<T>, delay: Duration) -> Result<ReadSignal<T>, ContextError> {
    let env = use_env()?;
    let (debounced, debouncer) = debounced_signal(value.get_untracked(), env.timer, delay);
    Effect::new(move |_| debouncer.push(value.get()));
    Ok(debounced)
}

/// [`use_debounce`] with the configured default delay.
///
/// # Errors
///
/// [`ContextError::MissingProvider`] when no `AppEnv` is in context.
pub fn use_default_debounce<T: SliceValue>(value: Signal<T>) -> Result<ReadSignal<T>, ContextError> {
    let delay = use_env()?.config.debounce();
    use_debounce(value, delay)
}
