//! Trailing-edge debounce over a [`Timer`].
//!
//! Every `push` cancels whatever commit is pending and schedules a fresh one
//! carrying the newest value, so at most one commit is ever queued and the
//! value committed is the last one seen before a quiet period of `delay`.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use crate::lock;
use crate::slice::{Slice, SliceValue};
use crate::timer::{Timer, TimerHandle};

type Commit<T> = Arc<dyn Fn(T) + Send + Sync>;

struct Pending<T> {
    generation: u64,
    value: T,
    _handle: TimerHandle,
}

struct State<T> {
    generation: u64,
    pending: Option<Pending<T>>,
    commits: u64,
}

/// Debounced sink for a stream of values.
pub struct Debouncer<T> {
    state: Arc<Mutex<State<T>>>,
    timer: Arc<dyn Timer>,
    delay: Duration,
    commit: Commit<T>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            timer: Arc::clone(&self.timer),
            delay: self.delay,
            commit: Arc::clone(&self.commit),
        }
    }
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(timer: Arc<dyn Timer>, delay: Duration, commit: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(State { generation: 0, pending: None, commits: 0 })),
            timer,
            delay,
            commit: Arc::new(commit),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record `value` as the latest input and restart the quiet-period timer.
    pub fn push(&self, value: T) {
        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.generation
        };

        let weak: Weak<Mutex<State<T>>> = Arc::downgrade(&self.state);
        let commit = Arc::clone(&self.commit);
        let handle = self.timer.schedule(
            self.delay,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                if let Some(value) = take_if_current(&state, generation) {
                    commit(value);
                }
            }),
        );

        let superseded = lock(&self.state).pending.replace(Pending { generation, value, _handle: handle });
        // Dropped outside the state lock: cancelling re-enters the timer.
        drop(superseded);
    }

    /// Commit the pending value immediately, if any. Returns whether a commit ran.
    pub fn flush(&self) -> bool {
        let pending = {
            let mut state = lock(&self.state);
            let pending = state.pending.take();
            if pending.is_some() {
                state.commits += 1;
            }
            pending
        };
        match pending {
            Some(Pending { value, _handle: handle, .. }) => {
                drop(handle);
                (self.commit)(value);
                true
            }
            None => false,
        }
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&self) {
        let pending = lock(&self.state).pending.take();
        drop(pending);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        lock(&self.state).pending.is_some()
    }

    /// Number of values committed so far.
    #[must_use]
    pub fn commits(&self) -> u64 {
        lock(&self.state).commits
    }
}

fn take_if_current<T>(state: &Mutex<State<T>>, generation: u64) -> Option<T> {
    let mut state = lock(state);
    if state.pending.as_ref().map(|p| p.generation) != Some(generation) {
        return None;
    }
    let pending = state.pending.take()?;
    state.commits += 1;
    drop(state);
    Some(pending.value)
}

/// Debouncer whose commits land in `slice`.
pub fn debounce_into<T: SliceValue>(slice: &Slice<T>, timer: Arc<dyn Timer>, delay: Duration) -> Debouncer<T> {
    let target = slice.clone();
    Debouncer::new(timer, delay, move |value| {
        if let Err(err) = target.set(value) {
            tracing::warn!(error = %err, "debounced commit dropped");
        }
    })
}
