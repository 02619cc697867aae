//! Cancellable delayed tasks.
//!
//! The browser client schedules on the UI event loop (`setTimeout`); tests
//! and server rendering use [`ManualScheduler`], a virtual-time queue that
//! only runs tasks when told to advance.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use crate::lock;

/// Work queued on a [`Timer`].
pub type Task = Box<dyn FnOnce() + Send>;

/// Something that can run a task after a delay.
pub trait Timer: Send + Sync {
    /// Queue `task` to run once after `delay`. Dropping the handle cancels it.
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Cancel guard for a scheduled task. Dropping the handle cancels the task
/// if it has not run yet; cancelling a task that already ran is a no-op.
#[must_use = "dropping a TimerHandle cancels the scheduled task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A handle with nothing to cancel, for timers that never fire.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle").field("armed", &self.cancel.is_some()).finish()
    }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

struct Queued {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    tasks: Vec<Queued>,
}

/// Deterministic virtual-time task queue.
///
/// Tasks run in deadline order, FIFO among equal deadlines, and only inside
/// [`ManualScheduler::advance`] or [`ManualScheduler::run_until_idle`]. Tasks
/// run without the queue lock held, so they may schedule or cancel others.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<Queue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        lock(&self.queue).now
    }

    /// Number of queued tasks not yet run or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        lock(&self.queue).tasks.len()
    }

    /// Move virtual time forward by `by`, running every task that falls due.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = lock(&self.queue).now + by;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        lock(&self.queue).now = target;
        ran
    }

    /// Run every queued task, jumping virtual time to each deadline.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop_due(Duration::MAX) {
            task();
            ran += 1;
        }
        ran
    }

    fn pop_due(&self, limit: Duration) -> Option<Task> {
        let mut queue = lock(&self.queue);
        let position = queue
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, q)| q.due <= limit)
            .min_by_key(|(_, q)| (q.due, q.id))
            .map(|(i, _)| i)?;
        let queued = queue.tasks.remove(position);
        queue.now = queue.now.max(queued.due);
        Some(queued.task)
    }
}

impl Timer for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = {
            let mut queue = lock(&self.queue);
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.tasks.push(Queued { id, due, task });
            id
        };
        let weak: Weak<Mutex<Queue>> = Arc::downgrade(&self.queue);
        TimerHandle::new(move || {
            if let Some(queue) = weak.upgrade() {
                lock(&queue).tasks.retain(|q| q.id != id);
            }
        })
    }
}
