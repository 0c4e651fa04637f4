//! Deferred single-fire completions for the simulated processing delays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once after a delay. Implementations must skip tasks whose handle was cancelled.
pub trait DelayScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: DeferredTask) -> ScheduledTask;
}

/// Handle to a scheduled task. Cancels the task when dropped.
#[derive(Debug)]
pub struct ScheduledTask {
    cancelled: Arc<AtomicBool>,
    abort: Option<AbortHandle>,
}

impl ScheduledTask {
    fn new(cancelled: Arc<AtomicBool>, abort: Option<AbortHandle>) -> Self {
        Self { cancelled, abort }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Scheduler backed by the tokio runtime timer.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Scheduler bound to the runtime the caller is running on, if any.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl DelayScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask) -> ScheduledTask {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if !flag.load(Ordering::Acquire) {
                task();
            }
        });
        ScheduledTask::new(cancelled, Some(join.abort_handle()))
    }
}

struct PendingTask {
    due: Duration,
    sequence: u64,
    cancelled: Arc<AtomicBool>,
    task: DeferredTask,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    sequence: u64,
    pending: Vec<PendingTask>,
}

/// Virtual-time scheduler: tasks fire only when [`ManualScheduler::advance`] moves the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of scheduled tasks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.lock()
            .pending
            .iter()
            .filter(|pending| !pending.cancelled.load(Ordering::Acquire))
            .count()
    }

    /// Move the clock forward and run every due, uncancelled task in due order.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut clock = self.lock();
            clock.now += by;
            let now = clock.now;
            let (mut due, waiting): (Vec<_>, Vec<_>) = clock
                .pending
                .drain(..)
                .partition(|pending| pending.due <= now);
            clock.pending = waiting;
            due.sort_by_key(|pending| (pending.due, pending.sequence));
            due
        };

        let mut fired = 0;
        for pending in due {
            if !pending.cancelled.load(Ordering::Acquire) {
                (pending.task)();
                fired += 1;
            }
        }
        fired
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualClock> {
        // Tasks run outside the lock, so a poisoned clock still holds consistent data.
        self.clock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask) -> ScheduledTask {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut clock = self.lock();
        let due = clock.now + delay;
        let sequence = clock.sequence;
        clock.sequence += 1;
        clock.pending.push(PendingTask {
            due,
            sequence,
            cancelled: cancelled.clone(),
            task,
        });
        ScheduledTask::new(cancelled, None)
    }
}
