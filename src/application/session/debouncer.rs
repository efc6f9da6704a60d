use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debouncer - one cancellable deferred-task slot
///
/// Scheduling replaces whatever is pending on the same slot: the earlier task
/// is aborted, whether it is still waiting out its delay or already in
/// flight. Separate debouncers never affect each other.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer {
    channel: &'static str,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(channel: &'static str) -> Self {
        Self {
            channel,
            pending: Mutex::new(None),
        }
    }

    pub fn channel(&self) -> &'static str {
        self.channel
    }

    /// Runs `task` after `delay`, cancelling the task scheduled before it
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                tracing::debug!(channel = self.channel, "superseding pending task");
            }
            previous.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancels the pending task, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// True while a scheduled task has not completed
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
